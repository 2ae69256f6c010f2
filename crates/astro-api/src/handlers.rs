//! Request handlers.

use astro_agents::{fallback_for, PromptLayout};
use astro_core::ReadingRequest;
use axum::extract::{FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{json, Value};

use crate::envelope::{CondensedReadingResponse, DetailedReadingResponse, FailureResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Reading request decoded as JSON or as an urlencoded form, depending on
/// the `Content-Type` header.
#[derive(Debug, Clone)]
pub struct ReadingPayload(pub ReadingRequest);

impl<S> FromRequest<S> for ReadingPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("application/json"));

        let request = if is_json {
            let Json(request) = Json::<ReadingRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            request
        } else {
            let Form(request) = Form::<ReadingRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            request
        };

        Ok(Self(request))
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "generator": state.orchestrator.generator_name(),
    }))
}

/// `POST /result`: full-detail envelope.
///
/// Every failure response carries a fallback reading. Failures before the
/// sign is known use the sentinel sign.
pub async fn full_reading(
    State(state): State<AppState>,
    payload: Result<ReadingPayload, ApiError>,
) -> Response {
    let request = match payload {
        Ok(ReadingPayload(request)) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Undecodable reading request");
            let body = FailureResponse::new(e.to_string()).with_fallback(fallback_for(None, None));
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let input = match request.validate() {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid reading request");
            let fallback = fallback_for(Some(&request.name), Some(&request.question));
            let body = FailureResponse::new(e.to_string()).with_fallback(fallback);
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let reading = state.orchestrator.generate(&input, PromptLayout::Detailed).await;

    match &reading.failure {
        Some(error) => {
            let body = FailureResponse::new(error.clone()).with_fallback(reading.text.clone());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
        None => Json(DetailedReadingResponse::from(&reading)).into_response(),
    }
}

/// `POST /api/reading`: condensed envelope.
///
/// Validation and date errors are rejected; generation problems still
/// answer with a fallback reading.
pub async fn api_reading(
    State(state): State<AppState>,
    ReadingPayload(request): ReadingPayload,
) -> ApiResult<Json<CondensedReadingResponse>> {
    let input = request.validate()?;
    let reading = state.orchestrator.generate(&input, PromptLayout::Condensed).await;

    Ok(Json(CondensedReadingResponse::new(&reading, state.debug)))
}
