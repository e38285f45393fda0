mod file;

use crate::cli::Args;
use crate::history::{JsonArchiveStore, DEFAULT_MAX_SESSIONS};
use std::env;
use std::path::PathBuf;

pub use file::{ApiConfig, FileConfig, HistoryConfig, ModelConfig, NewsConfig, SessionConfig};

pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
pub const DEFAULT_NEWS_ENDPOINT: &str = "https://newsapi.org/v2";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug)]
pub struct Config {
    pub gemini_api_key: String,
    pub news_api_key: String,
    pub api_endpoint: String,
    pub news_endpoint: String,
    pub model: String,
    pub history_file: PathBuf,
    pub history_max_sessions: usize,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        // Load file configuration first
        let file_config = FileConfig::load().unwrap_or_default();

        // Both API keys are required from env vars (never from files or args)
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY environment variable not set")?;
        let news_api_key = env::var("NEWS_API_KEY")
            .map_err(|_| "NEWS_API_KEY environment variable not set")?;

        // Get completion endpoint: CLI args > env var > file config > default
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("NEWSDESK_API_ENDPOINT").ok())
            .or(file_config.api.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let api_endpoint = normalize_endpoint(&api_endpoint);

        // Get news endpoint: CLI args > env var > file config > default
        let news_endpoint = args
            .news_endpoint
            .clone()
            .or_else(|| env::var("NEWSDESK_NEWS_ENDPOINT").ok())
            .or(file_config.news.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_NEWS_ENDPOINT.to_string());

        // Get model: CLI args > env var > file config > default
        let model = args
            .model
            .clone()
            .or_else(|| env::var("NEWSDESK_MODEL").ok())
            .or(file_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let history_file = Self::history_file_from(args, &file_config);

        // Get archive retention cap: env var > file config > default (0 disables)
        let history_max_sessions = env::var("NEWSDESK_HISTORY_MAX_SESSIONS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .or(file_config.history.max_sessions)
            .unwrap_or(DEFAULT_MAX_SESSIONS);

        // Get verbose flag: CLI args > env var > file config > default
        let verbose = args.verbose
            || env::var("NEWSDESK_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Ok(Config {
            gemini_api_key,
            news_api_key,
            api_endpoint,
            news_endpoint,
            model,
            history_file,
            history_max_sessions,
            verbose,
        })
    }

    /// Resolve the archive path alone, without requiring the API secrets.
    /// `--clear` runs through this before any provider is configured.
    pub fn resolve_history_file(args: &Args) -> PathBuf {
        let file_config = FileConfig::load().unwrap_or_default();
        Self::history_file_from(args, &file_config)
    }

    fn history_file_from(args: &Args, file_config: &FileConfig) -> PathBuf {
        args.history_file
            .clone()
            .or_else(|| env::var("NEWSDESK_HISTORY_FILE").ok().map(PathBuf::from))
            .or_else(|| file_config.history.file.clone().map(PathBuf::from))
            .unwrap_or_else(JsonArchiveStore::default_path)
    }
}

/// Accept either a bare provider base URL or a full chat-completions URL.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with("/chat/completions") {
        endpoint.to_string()
    } else {
        format!("{}/chat/completions", endpoint.trim_end_matches('/'))
    }
}
