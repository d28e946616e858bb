//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::assembler::assemble_resume;
use crate::generation::generator::{generate_content, generate_legacy_resume};
use crate::models::profile::{ContentSections, Profile};
use crate::routes::extract::{iso_timestamp, json_body};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub resume: String,
    #[serde(flatten)]
    pub sections: ContentSections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub success: bool,
    pub resume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

fn validated_profile(payload: Result<Json<Value>, JsonRejection>) -> Result<Profile, AppError> {
    let profile: Profile = json_body(payload)?;
    if let Some(field) = profile.first_missing_required() {
        return Err(AppError::missing_field(field));
    }
    Ok(profile)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Generates all four content sections plus the assembled resume.
/// Upstream failures are recovered with the template fallback and noted in `message`.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let profile = validated_profile(payload)?;

    info!(
        "Generating content for {} - {}",
        profile.full_name(),
        profile.job_title()
    );

    let generated = generate_content(state.llm(), &profile).await;
    let resume = assemble_resume(&profile, &generated.sections, Local::now().date_naive());

    Ok(Json(GenerateResponse {
        success: true,
        resume,
        sections: generated.sections,
        message: generated.fallback.map(|reason| reason.content_message()),
        timestamp: iso_timestamp(),
    }))
}

/// POST /generate-resume
///
/// Legacy single-shot resume generation. Returns only `resume` (and `message`
/// when the fallback layout was used).
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let profile = validated_profile(payload)?;

    let (resume, fallback) =
        generate_legacy_resume(state.llm(), &profile, Local::now().date_naive()).await;

    Ok(Json(GenerateResumeResponse {
        success: true,
        resume,
        message: fallback.map(|reason| reason.resume_message()),
    }))
}
