use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{Result, ServerError};
use crate::state::AppState;

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    pub answer: String,
}

pub async fn ask(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>> {
    let Some(model) = state.model.get() else {
        error!(
            reason = state.model.unavailable_reason().unwrap_or_default(),
            "Request received but the model was not initialized"
        );
        return Err(ServerError::ModelUnavailable);
    };

    let Json(request) = payload.map_err(reject_body)?;

    info!(question = %preview(&request.question), "New question received");

    match model.generate(&request.question).await {
        Ok(answer) => {
            info!(answer_len = answer.len(), "Model answer generated");
            Ok(Json(AskResponse { answer }))
        }
        Err(e) => {
            error!(error = %e, "Model request failed");
            Err(ServerError::from(e))
        }
    }
}

fn reject_body(rejection: JsonRejection) -> ServerError {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => {
            warn!(reason = %rejection.body_text(), "Invalid request, 'question' not found");
            ServerError::missing_question()
        }
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!(reason = %other.body_text(), "Request body over the configured limit");
            ServerError::PayloadTooLarge(other.body_text())
        }
        other => {
            warn!(reason = %other.body_text(), "Failed to read request body");
            ServerError::bad_request(other.body_text())
        }
    }
}

fn preview(question: &str) -> String {
    let mut chars = question.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
