//! In-memory, process-lifetime conversation store.
//!
//! Sessions are keyed by an optional user identifier. `None` is a valid
//! degenerate key: every caller that omits `user_id` shares one session.
//! There is no eviction, size cap, or persistence.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::sentiment::Emotion;

/// Number of history messages fed back into the prompt (5 exchanges).
pub const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One chat message. Immutable once appended.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// One recorded emotion reading. Append-only.
#[derive(Debug, Clone, Copy)]
pub struct EmotionSample {
    pub emotion: Emotion,
    pub compound: f64,
}

#[derive(Debug, Default)]
struct UserSession {
    messages: Vec<Message>,
    emotions: Vec<EmotionSample>,
}

/// Process-wide conversation state, shared behind one mutex.
///
/// The lock is only held for map access; it is never held across the
/// completion call. A completed exchange appends two messages and one
/// emotion sample atomically, so a session with N exchanges always holds
/// exactly 2N messages and N samples.
#[derive(Debug, Default)]
pub struct ConversationStore {
    sessions: Mutex<HashMap<Option<String>, UserSession>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(user_id: Option<&str>) -> Option<String> {
        user_id.map(str::to_string)
    }

    /// Last [`HISTORY_WINDOW`] messages for this user, oldest first. Empty
    /// for unknown users.
    pub fn history_tail(&self, user_id: Option<&str>) -> Vec<Message> {
        let sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match sessions.get(&Self::key(user_id)) {
            Some(session) => {
                let tail_start = session.messages.len().saturating_sub(HISTORY_WINDOW);
                session.messages[tail_start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Record one completed exchange: user message, assistant reply, and the
    /// emotion inferred for the user message, in one critical section.
    pub fn append_exchange(
        &self,
        user_id: Option<&str>,
        user_text: &str,
        reply: &str,
        emotion: EmotionSample,
    ) {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let session = sessions.entry(Self::key(user_id)).or_default();
        session.messages.push(Message {
            role: Role::User,
            text: user_text.to_string(),
        });
        session.messages.push(Message {
            role: Role::Assistant,
            text: reply.to_string(),
        });
        session.emotions.push(emotion);
    }

    /// Recorded emotion samples for this user, oldest first. Empty for
    /// unknown users.
    pub fn sentiment_history(&self, user_id: Option<&str>) -> Vec<EmotionSample> {
        let sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        sessions
            .get(&Self::key(user_id))
            .map(|session| session.emotions.clone())
            .unwrap_or_default()
    }

    /// Total messages logged for this user.
    pub fn message_count(&self, user_id: Option<&str>) -> usize {
        let sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        sessions
            .get(&Self::key(user_id))
            .map(|session| session.messages.len())
            .unwrap_or(0)
    }
}
