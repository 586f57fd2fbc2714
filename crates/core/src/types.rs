//! Shared primitive aliases.

/// Surrogate primary key; BIGSERIAL in Postgres. Public identifiers
/// (repairs, sessions, posts) are UUIDs instead.
pub type DbId = i64;

/// Every timestamp in the system is UTC; streak day boundaries depend
/// on it.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
