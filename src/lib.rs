//! News-aware chat assistant. Every user message is routed by an LLM
//! classifier: news requests go through a headline fetch plus an LLM summary,
//! everything else is answered from conversation context. Finished sessions
//! are archived to a JSON history file and the most recent one can be
//! resumed.

pub mod api;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod news;
pub mod ui;
