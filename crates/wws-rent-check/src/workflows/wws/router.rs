use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::AssessmentRequest;
use super::service::{AssessmentError, RentCheckService};

/// Request body: the assessment input plus an optional reference date for schedule selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentPayload {
    #[serde(flatten)]
    pub request: AssessmentRequest,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Router exposing the rent check over HTTP.
pub fn assessment_router(service: Arc<RentCheckService>) -> Router {
    Router::new()
        .route("/api/v1/wws/assessments", post(assess_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<RentCheckService>>,
    axum::Json(payload): axum::Json<AssessmentPayload>,
) -> Response {
    let as_of = payload
        .as_of
        .unwrap_or_else(|| Local::now().date_naive());

    match service.assess(payload.request, as_of) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(AssessmentError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentError::Configuration(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
