//! HTTP handlers for the chat API.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::{
    ChatRequest, ChatResponse, RootResponse, SentimentHistoryResponse, SentimentSampleDto,
};
use crate::api::state::AppState;
use crate::error::Result;

/// `POST /chat`
///
/// Runs the full pipeline: emotion/triage classification, prompt
/// composition with the user's history tail, the completion call, and the
/// conditional hospital recommendation. Always answers 200 once input
/// validation passes; provider failures surface inline in `reply`.
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Composed assistant reply", body = ChatResponse),
        (status = 400, description = "Empty user input"),
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let outcome = state
        .chat
        .handle(&req.user_input, req.user_id.as_deref())
        .await?;

    Ok(Json(outcome.into()))
}

/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Service status and feature list", body = RootResponse),
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "Medical Assistant Chatbot API running 🏥".to_string(),
        features: vec![
            "Medical Q&A".to_string(),
            "Sentiment Analysis".to_string(),
            "Emotional Support".to_string(),
            "Context-aware responses".to_string(),
        ],
    })
}

/// `GET /sentiment/{user_id}`
///
/// Emotion history recorded for a user, oldest first. Unknown users get an
/// empty list rather than a 404.
#[utoipa::path(
    get,
    path = "/sentiment/{user_id}",
    tag = "chat",
    params(
        ("user_id" = String, Path, description = "Conversation key"),
    ),
    responses(
        (status = 200, description = "Recorded emotion history", body = SentimentHistoryResponse),
    )
)]
pub async fn sentiment_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<SentimentHistoryResponse> {
    let sentiment_history = state
        .store
        .sentiment_history(Some(&user_id))
        .into_iter()
        .map(SentimentSampleDto::from)
        .collect();

    Json(SentimentHistoryResponse { sentiment_history })
}
