//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::analysis::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// Absent, `null` and empty fields are all rejected by the handler.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub jd_text: Option<String>,
}

/// POST /analyze
///
/// Scores a résumé against a job description. Both fields are required.
/// The analysis runs on the blocking pool so large inputs never stall the runtime.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let (resume_text, jd_text) = match (request.resume_text, request.jd_text) {
        (Some(resume), Some(jd)) if !resume.is_empty() && !jd.is_empty() => (resume, jd),
        _ => return Err(AppError::Validation("Both fields are required".to_string())),
    };

    let span = info_span!("analyze", request_id = %Uuid::new_v4());
    let lexicon = Arc::clone(&state.lexicon);

    let result = tokio::task::spawn_blocking(move || {
        let _entered = span.entered();
        let result = analyze(&resume_text, &jd_text, &lexicon);
        info!(
            score = result.score,
            found = result.found_keywords.len(),
            missing = result.missing_keywords.len(),
            resume_chars = resume_text.len(),
            jd_chars = jd_text.len(),
            "Analysis complete"
        );
        result
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("analysis task failed: {e}")))?;

    Ok(Json(result))
}
