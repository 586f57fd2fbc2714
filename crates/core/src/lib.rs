//! Pure domain logic for the FixHub repair assistant.
//!
//! Everything in this crate is side-effect free: the progression engine,
//! AI analysis result types, insights aggregation, and the community
//! moderation vocabulary. Persistence and HTTP live in `fixhub-db` and
//! `fixhub-api`.

pub mod analysis;
pub mod error;
pub mod guidelines;
pub mod insights;
pub mod moderation;
pub mod progression;
pub mod types;
pub mod vendors;
