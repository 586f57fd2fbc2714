//! Handler for the `/vendors` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use fixhub_ai::extract::extract_json_array;
use fixhub_ai::prompts;
use fixhub_core::vendors::LocalVendor;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for a vendor directory lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct VendorSearchRequest {
    #[validate(length(min = 1, message = "item_type must not be empty"))]
    pub item_type: String,
    /// City or zip code.
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// POST /api/v1/vendors/search
///
/// LLM-generated local repair vendor list for an item type + location.
/// Each array entry is parsed fail-soft; unparseable entries are
/// dropped rather than failing the request.
pub async fn search_vendors(
    State(state): State<AppState>,
    Json(request): Json<VendorSearchRequest>,
) -> AppResult<Json<DataResponse<Vec<LocalVendor>>>> {
    request.validate()?;

    let prompt = prompts::vendor_search_prompt(&request.item_type, &request.location);
    let reply = state.ai.generate(prompts::VENDOR_SYSTEM, &prompt).await?;

    let value = extract_json_array(&reply).ok_or_else(|| {
        tracing::error!("Vendor reply contained no parseable JSON array");
        AppError::InternalError("The vendor reply could not be parsed".into())
    })?;

    let vendors: Vec<LocalVendor> = value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    tracing::info!(
        item_type = %request.item_type,
        location = %request.location,
        count = vendors.len(),
        "Vendor search completed"
    );
    Ok(Json(DataResponse { data: vendors }))
}
