//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a transaction, for locked read-modify-write
//! cycles) as the first argument.

pub mod community_repo;
pub mod feedback_repo;
pub mod profile_repo;
pub mod repair_repo;
pub mod report_repo;
pub mod session_repo;

pub use community_repo::CommunityRepo;
pub use feedback_repo::FeedbackRepo;
pub use profile_repo::ProfileRepo;
pub use repair_repo::RepairRepo;
pub use report_repo::ReportRepo;
pub use session_repo::SessionRepo;
