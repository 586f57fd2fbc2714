//! Row models and insert DTOs, one module per aggregate.

pub mod community;
pub mod feedback;
pub mod profile;
pub mod repair;
pub mod session;
