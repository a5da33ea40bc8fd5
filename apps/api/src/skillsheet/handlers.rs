//! Axum route handlers for skill sheet upload and retrieval.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::skillsheet::cache::CachedSkillSheet;
use crate::skillsheet::format::format_skill_sheet;
use crate::skillsheet::models::SkillSheet;
use crate::skillsheet::{describe_parse_error, parse_skill_sheet};
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls"];

#[derive(Debug, Serialize)]
pub struct SkillSheetResponse {
    pub upload_id: Uuid,
    pub file_name: String,
    pub skill_sheet: SkillSheet,
    pub formatted_text: String,
}

impl From<&CachedSkillSheet> for SkillSheetResponse {
    fn from(cached: &CachedSkillSheet) -> Self {
        Self {
            upload_id: cached.upload_id,
            file_name: cached.file_name.clone(),
            skill_sheet: cached.skill_sheet.clone(),
            formatted_text: cached.formatted_text.clone(),
        }
    }
}

/// POST /api/v1/skillsheet
///
/// Multipart upload with a `file` field. Parses the skill sheet, stores it as
/// the latest upload and returns both the structured and the prompt form.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SkillSheetResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if !has_accepted_extension(&file_name) {
            return Err(AppError::Validation(format!(
                "Unsupported file type '{file_name}': expected .xlsx, .xlsm or .xls"
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let skill_sheet = tokio::task::spawn_blocking(move || parse_skill_sheet(&bytes))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
            .map_err(|e| {
                warn!("Skill sheet '{file_name}' rejected: {e}");
                AppError::UnprocessableEntity(describe_parse_error(&e))
            })?;

        if skill_sheet.is_empty() {
            warn!("Skill sheet '{file_name}' has no recognizable content; layout may differ from the template");
        }

        let cached = CachedSkillSheet {
            upload_id: Uuid::new_v4(),
            file_name,
            uploaded_at: Utc::now(),
            formatted_text: format_skill_sheet(&skill_sheet),
            skill_sheet,
        };
        let response = SkillSheetResponse::from(&cached);

        if let Some(previous) = state.skill_sheets.replace(cached).await {
            info!(
                "Skill sheet '{}' replaced previous upload '{}'",
                response.file_name, previous.file_name
            );
        }

        return Ok(Json(response));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// GET /api/v1/skillsheet
///
/// Returns the most recently uploaded skill sheet.
pub async fn handle_get_latest(
    State(state): State<AppState>,
) -> Result<Json<SkillSheetResponse>, AppError> {
    let cached = state
        .skill_sheets
        .latest()
        .await
        .ok_or_else(|| AppError::NotFound("No skill sheet has been uploaded".to_string()))?;
    Ok(Json(SkillSheetResponse::from(cached.as_ref())))
}

/// DELETE /api/v1/skillsheet
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.skill_sheets.clear().await;
    StatusCode::NO_CONTENT
}

fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}
