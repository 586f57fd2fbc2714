//! Handlers for the `/repairs` resource.
//!
//! Image analysis, diagnosis refinement, interactive troubleshooting,
//! and per-step deep dives. Analysis parsing is fail-soft throughout:
//! a sloppy model reply degrades fields to defaults instead of failing
//! the request.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use fixhub_ai::extract::extract_json_object;
use fixhub_ai::prompts;
use fixhub_core::analysis::{RepairAnalysis, RepairReport, SkillLevel};
use fixhub_core::error::CoreError;
use fixhub_db::models::repair::NewRepair;
use fixhub_db::repositories::RepairRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn default_mime_type() -> String {
    "image/jpeg".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

// ---------------------------------------------------------------------------
// Analyze
// ---------------------------------------------------------------------------

/// Request body for image analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub image_base64: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub model_number: Option<String>,
}

/// POST /api/v1/repairs/analyze
///
/// Sends the photo to the vision model, parses the structured reply
/// fail-soft, generates a technical diagram when possible (failure is
/// tolerated and logged), persists the repair, and returns the full
/// report with a fresh `repair_id`.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<DataResponse<RepairReport>>> {
    if request.image_base64.trim().is_empty() {
        return Err(AppError::BadRequest("image_base64 must not be empty".into()));
    }

    let skill_level = request
        .skill_level
        .as_deref()
        .map(SkillLevel::parse_or_default)
        .unwrap_or_default();

    let prompt = prompts::analysis_prompt(
        &request.language,
        skill_level,
        request.model_number.as_deref(),
    );

    let reply = state
        .ai
        .generate_with_image(
            prompts::ANALYST_SYSTEM,
            &prompt,
            &request.image_base64,
            &request.mime_type,
        )
        .await?;

    let value = extract_json_object(&reply).ok_or_else(|| {
        tracing::error!("Analysis reply contained no parseable JSON");
        AppError::InternalError("The analysis reply could not be parsed".into())
    })?;
    // Lenient field deserializers absorb anything the model mangled.
    let analysis: RepairAnalysis = serde_json::from_value(value).unwrap_or_default();

    let diagram_base64 = generate_diagram(&state, &analysis).await;

    let repair_id = Uuid::new_v4();
    let record = NewRepair {
        repair_id,
        item_type: analysis.item_type.clone(),
        damage_description: analysis.damage_description.clone(),
        repair_difficulty: analysis.repair_difficulty.as_str().to_string(),
        estimated_time: analysis.estimated_time.clone(),
        risk_level: analysis.risk_level.as_str().to_string(),
        confidence_score: analysis.confidence_score,
        stop_and_call_pro: analysis.stop_and_call_pro,
        model_number: request.model_number.clone(),
        analysis: serde_json::to_value(&analysis)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize analysis: {e}")))?,
        diagram_base64: diagram_base64.clone(),
    };
    RepairRepo::insert(&state.pool, &record).await?;

    tracing::info!(
        %repair_id,
        item_type = %analysis.item_type,
        risk_level = analysis.risk_level.as_str(),
        "Repair analyzed"
    );

    Ok(Json(DataResponse {
        data: RepairReport {
            repair_id,
            analysis,
            model_number: request.model_number,
            diagram_base64,
            timestamp: Utc::now(),
        },
    }))
}

/// Ask the image model for a diagram of the first few repair steps.
/// Any failure is logged and swallowed; the report ships without one.
async fn generate_diagram(state: &AppState, analysis: &RepairAnalysis) -> Option<String> {
    if analysis.repair_steps.is_empty() {
        return None;
    }

    let steps: Vec<String> = analysis
        .repair_steps
        .iter()
        .filter_map(|step| match step {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(map) => map
                .get("description")
                .or_else(|| map.get("text"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            _ => None,
        })
        .collect();

    let prompt = prompts::diagram_prompt(&analysis.item_type, &steps);
    match state
        .ai
        .generate_diagram(prompts::ILLUSTRATOR_SYSTEM, &prompt)
        .await
    {
        Ok(diagram) => diagram,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to generate repair diagram");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Refine
// ---------------------------------------------------------------------------

/// Request body for diagnosis refinement.
#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub item_type: String,
    #[serde(default)]
    pub initial_analysis: serde_json::Value,
    /// Diagnostic question id -> user answer.
    #[serde(default)]
    pub diagnostic_answers: BTreeMap<String, String>,
}

/// POST /api/v1/repairs/refine
///
/// Refines a diagnosis from the user's diagnostic answers. Never
/// surfaces an LLM failure: on any error the initial analysis comes
/// back with a `refined_diagnosis` note.
pub async fn refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let damage = request.initial_analysis["damage_description"]
        .as_str()
        .unwrap_or("Unknown")
        .to_string();
    let initial_steps: Vec<String> = request.initial_analysis["repair_steps"]
        .as_array()
        .map(|steps| {
            steps
                .iter()
                .filter_map(|s| s.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let answers: Vec<(String, String)> = request
        .diagnostic_answers
        .iter()
        .map(|(id, answer)| (id.clone(), answer.clone()))
        .collect();

    let prompt = prompts::refine_prompt(&request.item_type, &damage, &initial_steps, &answers);

    let mut refined = match state.ai.generate(prompts::REFINE_SYSTEM, &prompt).await {
        Ok(reply) => extract_json_object(&reply).unwrap_or_else(|| {
            let mut fallback = request.initial_analysis.clone();
            fallback["refined_diagnosis"] = serde_json::Value::String(damage.clone());
            fallback
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Refinement failed, returning initial analysis");
            let mut fallback = request.initial_analysis.clone();
            fallback["refined_diagnosis"] = serde_json::Value::String(damage.clone());
            fallback
        }
    };

    // Carry the identity fields through regardless of what the model said.
    refined["item_type"] = serde_json::Value::String(request.item_type);
    if refined.get("repair_id").is_none() {
        let repair_id = request.initial_analysis["repair_id"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        refined["repair_id"] = serde_json::Value::String(repair_id);
    }

    Ok(Json(DataResponse { data: refined }))
}

// ---------------------------------------------------------------------------
// Troubleshoot
// ---------------------------------------------------------------------------

/// Request body for interactive troubleshooting.
#[derive(Debug, Deserialize)]
pub struct TroubleshootRequest {
    pub repair_id: Uuid,
    pub question: String,
    pub user_answer: String,
}

/// Troubleshooting guidance payload.
#[derive(Debug, serde::Serialize)]
pub struct TroubleshootResponse {
    pub guidance: String,
    pub follow_up_question: Option<String>,
}

/// POST /api/v1/repairs/troubleshoot
///
/// Follow-up guidance for a stored repair. 404 when the repair id is
/// unknown.
pub async fn troubleshoot(
    State(state): State<AppState>,
    Json(request): Json<TroubleshootRequest>,
) -> AppResult<Json<DataResponse<TroubleshootResponse>>> {
    let repair = RepairRepo::find_by_repair_id(&state.pool, request.repair_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Repair",
            id: request.repair_id.to_string(),
        }))?;

    let prompt = prompts::troubleshoot_prompt(
        &repair.item_type,
        &repair.damage_description,
        &request.question,
        &request.user_answer,
    );
    let guidance = state
        .ai
        .generate(prompts::TROUBLESHOOT_SYSTEM, &prompt)
        .await?;

    Ok(Json(DataResponse {
        data: TroubleshootResponse {
            guidance,
            follow_up_question: None,
        },
    }))
}

// ---------------------------------------------------------------------------
// Step details
// ---------------------------------------------------------------------------

/// Request body for a per-step deep dive.
#[derive(Debug, Deserialize)]
pub struct StepDetailsRequest {
    pub item_type: String,
    pub step_number: i32,
    pub step_text: String,
}

/// Per-step explanation payload.
#[derive(Debug, serde::Serialize)]
pub struct StepDetailsResponse {
    pub step_number: i32,
    pub step_text: String,
    pub detailed_explanation: String,
}

/// POST /api/v1/repairs/step-details
///
/// Detailed explanation of one repair step.
pub async fn step_details(
    State(state): State<AppState>,
    Json(request): Json<StepDetailsRequest>,
) -> AppResult<Json<DataResponse<StepDetailsResponse>>> {
    let prompt = prompts::step_details_prompt(
        &request.item_type,
        request.step_number,
        &request.step_text,
    );
    let detailed_explanation = state
        .ai
        .generate(prompts::STEP_DETAILS_SYSTEM, &prompt)
        .await?;

    Ok(Json(DataResponse {
        data: StepDetailsResponse {
            step_number: request.step_number,
            step_text: request.step_text,
            detailed_explanation,
        },
    }))
}
