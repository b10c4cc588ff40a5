// Career forwarding handler
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::error::AppError;
use crate::gateway::server::AppState;
use crate::models::ErrorPayload;

/// Route path, echoed in every error payload
pub const CAREER_PATH: &str = "/api/career";

const FETCH_FALLBACK: &str = "Failed to fetch data from backend.";

/// Handle GET /api/career
///
/// Validates the inbound query, forwards it to the configured backend and
/// relays the parsed JSON body. Every failure mode answers with a uniform
/// [`ErrorPayload`]; nothing propagates past this boundary.
pub async fn handle_career(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    // 1. Config check
    let Some(base_url) = state.config.backend_base_url.clone() else {
        return error_response(&AppError::Config("backendUrl"));
    };

    // 2. Validation
    let (lang, keys) = parse_query(query.as_deref().unwrap_or(""));
    let Some(lang) = lang else {
        return error_response(&AppError::MissingParam("lang"));
    };

    // 3. Forward and relay
    match state.upstream.fetch_career(&base_url, &lang, &keys).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            tracing::error!("Career fetch failed: {}", e);
            error_response(&e)
        }
    }
}

/// Extract `lang` (first occurrence, empty treated as absent) and every `key`
/// value in original order.
fn parse_query(query: &str) -> (Option<String>, Vec<String>) {
    let mut lang: Option<String> = None;
    let mut keys = Vec::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match name.as_ref() {
            "lang" if lang.is_none() => lang = Some(value.into_owned()),
            "key" => keys.push(value.into_owned()),
            _ => {}
        }
    }
    (lang.filter(|value| !value.is_empty()), keys)
}

fn error_response(error: &AppError) -> Response {
    let mut message = error.to_string();
    if message.is_empty() {
        message = FETCH_FALLBACK.to_string();
    }
    let status = error.status();
    let payload = ErrorPayload::new(message, status, CAREER_PATH);
    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (code, Json(payload)).into_response()
}
