//! HTTP routes.
//!
//! Endpoints:
//! - POST /api/calculate-numerology  → analysis record (stored; id in `x-analysis-id`)
//! - POST /api/generate-ai-analysis  → `{"aiAnalysis": "..."}`
//! - GET  /api/analyses/{id}         → stored analysis
//! - GET  /api/analyses?day=&month=&year= → stored analyses for a date
//! - GET  /api/health                → `{"status": "ok"}`

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use sankhya_core::{AnalysisRecord, BirthDate, analyze_date};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::reading::ReadingClient;
use crate::storage::{AnalysisStore, NewAnalysis, StoredAnalysis};

/// Response header carrying the id of a freshly stored analysis.
pub const ANALYSIS_ID_HEADER: &str = "x-analysis-id";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnalysisStore>,
    pub reading: Arc<ReadingClient>,
}

impl AppState {
    pub fn new(store: Arc<dyn AnalysisStore>, reading: ReadingClient) -> Self {
        Self {
            store,
            reading: Arc::new(reading),
        }
    }
}

/// Birth date as posted by clients.
#[derive(Debug, Deserialize)]
pub struct DateOfBirth {
    pub day: i64,
    pub month: i64,
    pub year: i64,
}

impl DateOfBirth {
    fn validate(&self) -> Result<BirthDate, ApiError> {
        BirthDate::new(self.day, self.month, self.year).map_err(|e| {
            tracing::debug!(error = %e, "birth date rejected");
            ApiError::InvalidInput
        })
    }
}

#[derive(Debug, Deserialize)]
struct ReadingRequest {
    #[serde(default)]
    analysis: Option<AnalysisRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadingResponse {
    ai_analysis: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/calculate-numerology", post(calculate_numerology))
        .route("/generate-ai-analysis", post(generate_ai_analysis))
        .route("/analyses", get(analyses_by_date))
        .route("/analyses/{id}", get(get_analysis))
        .route("/health", get(health))
        .with_state(state);

    Router::new().nest("/api", api)
}

/// POST /api/calculate-numerology
async fn calculate_numerology(
    State(state): State<AppState>,
    body: Result<Json<DateOfBirth>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(dob) = body.map_err(|e| {
        tracing::debug!(error = %e, "unreadable birth date body");
        ApiError::InvalidInput
    })?;
    let date = dob.validate()?;
    tracing::info!(%date, "POST /api/calculate-numerology");

    let record = analyze_date(date);
    let blob = serde_json::to_value(&record).map_err(|e| ApiError::Internal(e.to_string()))?;
    let stored = state.store.create(NewAnalysis {
        input_date: record.input_dob.clone(),
        day: date.day(),
        month: date.month(),
        year: date.year(),
        analysis: blob,
        created_at: chrono::Utc::now().to_rfc3339(),
    });

    let mut response = Json(record).into_response();
    response
        .headers_mut()
        .insert(ANALYSIS_ID_HEADER, HeaderValue::from(stored.id));
    Ok(response)
}

/// POST /api/generate-ai-analysis
async fn generate_ai_analysis(
    State(state): State<AppState>,
    body: Result<Json<ReadingRequest>, JsonRejection>,
) -> Result<Json<ReadingResponse>, ApiError> {
    let analysis = body
        .ok()
        .and_then(|Json(req)| req.analysis)
        .ok_or(ApiError::MissingAnalysis)?;
    tracing::info!(dob = %analysis.input_dob, "POST /api/generate-ai-analysis");

    let ai_analysis = state.reading.generate(&analysis).await?;
    Ok(Json(ReadingResponse { ai_analysis }))
}

/// GET /api/analyses/{id}
async fn get_analysis(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<StoredAnalysis>, ApiError> {
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "unreadable analysis id");
        ApiError::InvalidInput
    })?;
    tracing::debug!(id, "GET /api/analyses/{{id}}");
    state.store.get(id).map(Json).ok_or(ApiError::NotFound(id))
}

/// GET /api/analyses?day=&month=&year=
async fn analyses_by_date(
    State(state): State<AppState>,
    query: Result<Query<DateOfBirth>, QueryRejection>,
) -> Result<Json<Vec<StoredAnalysis>>, ApiError> {
    let Query(dob) = query.map_err(|e| {
        tracing::debug!(error = %e, "unreadable date query");
        ApiError::InvalidInput
    })?;
    let date = dob.validate()?;
    tracing::debug!(%date, "GET /api/analyses");
    Ok(Json(state.store.by_date(date.day(), date.month(), date.year())))
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
