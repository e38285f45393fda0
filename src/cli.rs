use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(about = "News-aware chat assistant backed by an LLM classifier", long_about = None)]
pub struct Args {
    #[arg(
        short = 'n',
        long = "new",
        help = "Start a fresh session instead of resuming the last one"
    )]
    pub new_session: bool,

    #[arg(long = "clear", help = "Delete the chat history archive and exit")]
    pub clear_history: bool,

    #[arg(long = "history-file", help = "Path to the chat history archive")]
    pub history_file: Option<PathBuf>,

    #[arg(long = "model", help = "Completion model identifier")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom completion API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(long = "news-endpoint", help = "Custom news provider base URL")]
    pub news_endpoint: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Log pipeline steps to stderr")]
    pub verbose: bool,

    #[arg(help = "Message to send; omit to start an interactive session")]
    pub message: Vec<String>,
}
