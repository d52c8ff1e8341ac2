//! Request/response DTOs for the chat API.
//!
//! Wire field names are snake_case. Clients depend on `detail` in error
//! bodies and on the exact `sentiment`/`location_context` shapes below.

use serde::{Deserialize, Serialize};

use crate::services::ChatOutcome;
use crate::store::EmotionSample;

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ChatRequest {
    /// The user's health question. Must be non-empty after trimming.
    pub user_input: String,
    /// Conversation key. Omitting it joins the shared anonymous session.
    pub user_id: Option<String>,
    /// Accepted for compatibility; the service always answers concisely.
    #[serde(default = "default_detail_mode")]
    pub detail_mode: String,
}

fn default_detail_mode() -> String {
    "concise".to_string()
}

/// Sentiment breakdown returned with every reply.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SentimentDto {
    pub emotion: String,
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub motivation: String,
}

/// Location/specialty classification returned with every reply.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationContextDto {
    pub is_bangalore: bool,
    pub wants_facility: bool,
    pub specialty: String,
    pub is_complicated: bool,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatResponse {
    pub reply: String,
    pub sentiment: SentimentDto,
    pub location_context: LocationContextDto,
    pub recommended_hospitals: bool,
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        Self {
            reply: outcome.reply,
            sentiment: SentimentDto {
                emotion: outcome.emotion.label().to_string(),
                compound: outcome.scores.compound,
                positive: outcome.scores.positive,
                negative: outcome.scores.negative,
                neutral: outcome.scores.neutral,
                motivation: outcome.motivation,
            },
            location_context: LocationContextDto {
                is_bangalore: outcome.triage.is_bangalore,
                wants_facility: outcome.triage.wants_facility,
                specialty: outcome.triage.specialty.as_str().to_string(),
                is_complicated: outcome.triage.is_complicated,
            },
            recommended_hospitals: outcome.recommended_hospitals,
        }
    }
}

/// One entry of a user's recorded emotion history.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SentimentSampleDto {
    pub emotion: String,
    pub compound: f64,
}

impl From<EmotionSample> for SentimentSampleDto {
    fn from(sample: EmotionSample) -> Self {
        Self {
            emotion: sample.emotion.label().to_string(),
            compound: sample.compound,
        }
    }
}

/// Response body for `GET /sentiment/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SentimentHistoryResponse {
    pub sentiment_history: Vec<SentimentSampleDto>,
}

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub status: String,
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults_detail_mode() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"user_input": "I have a cough"}"#).expect("deserialize");
        assert_eq!(req.user_input, "I have a cough");
        assert!(req.user_id.is_none());
        assert_eq!(req.detail_mode, "concise");
    }

    #[test]
    fn chat_request_accepts_all_fields() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"user_input": "hi", "user_id": "u1", "detail_mode": "detailed"}"#,
        )
        .expect("deserialize");
        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert_eq!(req.detail_mode, "detailed");
    }
}
