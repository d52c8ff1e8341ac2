//! Response assembly: classify, compose, complete, post-process, record.

use std::sync::Arc;

use crate::error::{ArogyaError, Result};
use crate::hospitals;
use crate::llm::prompts::{chat_prompt, render_history};
use crate::llm::{LlmError, LlmProvider};
use crate::sentiment::{self, Emotion, SentimentScores};
use crate::store::{ConversationStore, EmotionSample};
use crate::triage::{self, Triage};

/// Fixed degraded reply when the provider reports quota exhaustion.
const QUOTA_REPLY: &str =
    "⚠️ Gemini API quota exceeded. Please check your API key or wait a minute.";

/// Assembled result of one chat request.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub reply: String,
    pub emotion: Emotion,
    pub scores: SentimentScores,
    pub motivation: String,
    pub triage: Triage,
    pub recommended_hospitals: bool,
}

/// Orchestrates one exchange end to end. Stateless apart from the shared
/// conversation store; safe to clone into every request handler.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<ConversationStore>,
    llm: LlmProvider,
}

impl ChatService {
    pub fn new(store: Arc<ConversationStore>, llm: LlmProvider) -> Self {
        Self { store, llm }
    }

    /// Handle one user message.
    ///
    /// Empty input is rejected up front. Provider failures degrade into a
    /// canned reply with neutral sentiment and leave the store untouched;
    /// once input validation passes the endpoint always answers 200.
    pub async fn handle(&self, user_text: &str, user_id: Option<&str>) -> Result<ChatOutcome> {
        if user_text.trim().is_empty() {
            return Err(ArogyaError::Validation(
                "User input cannot be empty".to_string(),
            ));
        }

        let analysis = sentiment::analyze(user_text);
        let triage = triage::classify(user_text);

        let history = self.store.history_tail(user_id);
        let history_text = render_history(&history);
        let prompt = chat_prompt(
            &history_text,
            user_text,
            analysis.emotion.label(),
            analysis.emotion.motivation(),
        );

        let completion = match self.llm.complete(&prompt).await {
            Ok(text) => text,
            Err(LlmError::QuotaExceeded) => {
                tracing::warn!("completion provider quota exhausted");
                return Ok(Self::degraded(QUOTA_REPLY.to_string(), triage));
            }
            Err(LlmError::Provider(message)) => {
                tracing::error!(error = %message, "completion provider failure");
                return Ok(Self::degraded(format!("❌ Error: {message}"), triage));
            }
        };

        let mut reply = completion.trim().to_string();

        // Complicated cases always get the hospital list; otherwise only an
        // explicit Bangalore facility request does.
        let recommend = triage.is_complicated || (triage.is_bangalore && triage.wants_facility);
        if recommend {
            reply.push_str("\n\n");
            reply.push_str(&hospitals::recommend(triage.specialty, triage.is_complicated));
        }

        self.store.append_exchange(
            user_id,
            user_text,
            &reply,
            EmotionSample {
                emotion: analysis.emotion,
                compound: analysis.scores.compound,
            },
        );

        Ok(ChatOutcome {
            reply,
            emotion: analysis.emotion,
            scores: analysis.scores,
            motivation: analysis.emotion.motivation().to_string(),
            triage,
            recommended_hospitals: recommend,
        })
    }

    /// Degraded-but-successful outcome: neutral sentiment, no hospital
    /// list, nothing recorded.
    fn degraded(reply: String, triage: Triage) -> ChatOutcome {
        ChatOutcome {
            reply,
            emotion: Emotion::Neutral,
            scores: SentimentScores::zero(),
            motivation: String::new(),
            triage,
            recommended_hospitals: false,
        }
    }
}
