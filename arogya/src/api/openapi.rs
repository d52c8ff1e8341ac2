use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arogya API",
        version = "1.0.0",
        description = "Emotion-aware medical assistant chatbot. Routes health questions to a hosted LLM with rule-based triage and Bangalore hospital recommendations.",
    ),
    paths(
        handlers::chat,
        handlers::root,
        handlers::sentiment_history,
    ),
    components(schemas(
        dto::ChatRequest,
        dto::ChatResponse,
        dto::SentimentDto,
        dto::LocationContextDto,
        dto::SentimentSampleDto,
        dto::SentimentHistoryResponse,
        dto::RootResponse,
    )),
    tags(
        (name = "chat", description = "Chat and sentiment history"),
        (name = "meta", description = "Service status"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
