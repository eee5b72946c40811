use axum::{
    body::Bytes,
    routing::any,
    Router,
    extract::{Json, State},
    http::Method,
};
use serde_json::Value;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

use crate::error::{Result, AppError};
use crate::api::models::{AnswerPayload, AskRequest};
use crate::extract::extract_json_object;
use crate::llm::call_anthropic;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Every method is routed here so non-POST requests get the JSON 405 body
        .route("/api/ask", any(ask_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn ask_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<Value>> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let question = AskRequest::question_from_body(&body)?;
    answer_question(&state, &question).await.map(Json)
}

async fn answer_question(state: &AppState, question: &str) -> Result<Value> {
    let start_time = std::time::Instant::now();
    let content = call_anthropic(&state.client, &state.config, question).await?;
    tracing::debug!(elapsed = ?start_time.elapsed(), chars = content.len(), "AI response received");

    let answer = extract_json_object(&content)?;
    if state.config.strict_answer_shape {
        AnswerPayload::validate(&answer)?;
    }

    Ok(answer)
}
