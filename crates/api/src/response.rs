//! Response envelope for API handlers.
//!
//! Every endpoint wraps its payload as `{ "data": ... }`, whether that
//! payload is a stored row, a parsed model reply, or a progression
//! update. Frontends unwrap one key everywhere, and error bodies
//! (which use `error`/`code` instead, see [`crate::error`]) stay
//! unambiguous.

use serde::Serialize;

/// The `{ "data": T }` envelope returned by every successful endpoint.
///
/// ```ignore
/// Ok(Json(DataResponse { data: report }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
