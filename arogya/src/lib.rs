pub mod api;
pub mod config;
pub mod error;
pub mod hospitals;
pub mod llm;
pub mod sentiment;
pub mod services;
pub mod store;
pub mod triage;
