mod chat;

pub use chat::{ChatOutcome, ChatService};
