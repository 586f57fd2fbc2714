//! HTTP handler implementations, one module per resource.

pub mod community;
pub mod feedback;
pub mod gamification;
pub mod insights;
pub mod repairs;
pub mod sessions;
pub mod vendors;
