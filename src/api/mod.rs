pub mod client;
pub mod models;
pub mod response;

pub use client::{ChatCompletionsClient, CompletionClient};
pub use models::RequestBody;
