use clap::Parser;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process;

use newsdesk::api::ChatCompletionsClient;
use newsdesk::assistant::{Assistant, SessionState};
use newsdesk::cli::Args;
use newsdesk::config::Config;
use newsdesk::history::{HistoryStore, JsonArchiveStore};
use newsdesk::news::NewsFetcher;
use newsdesk::ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Handle --clear before touching provider configuration; it must work
    // without API keys in the environment
    if args.clear_history {
        let path = Config::resolve_history_file(&args);
        let store = JsonArchiveStore::new(path, 0);
        match store.clear() {
            Ok(()) => {
                println!("{}", "Chat history cleared.".green());
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", format!("Error clearing history: {}", e).red());
                process::exit(1);
            }
        }
    }

    // Load configuration
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!("[newsdesk] Using model: {}", config.model).dimmed()
        );
        eprintln!(
            "{}",
            format!("[newsdesk] Completion endpoint: {}", config.api_endpoint).dimmed()
        );
        eprintln!(
            "{}",
            format!("[newsdesk] History file: {}", config.history_file.display()).dimmed()
        );
    }

    let completions =
        match ChatCompletionsClient::new(&config.gemini_api_key, &config.api_endpoint) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        };

    let assistant = Assistant {
        completions: Box::new(completions),
        news: NewsFetcher::new(&config.news_api_key, &config.news_endpoint),
        store: Box::new(JsonArchiveStore::new(
            &config.history_file,
            config.history_max_sessions,
        )),
        model: config.model.clone(),
        verbose: config.verbose,
    };

    let (mut state, greeting) = assistant.on_start(!args.new_session);

    // One-shot mode: message given on the command line, no prompt loop
    if !args.message.is_empty() {
        let text = args.message.join(" ");
        match assistant.on_message(&mut state, &text).await {
            Ok(response) => ui::print_response(&response),
            Err(e) => {
                ui::print_error(&e.to_string());
                finish_session(&assistant, &state);
                process::exit(1);
            }
        }
        finish_session(&assistant, &state);
        return Ok(());
    }

    ui::print_greeting(greeting);

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }

                let _ = rl.add_history_entry(&line);

                match assistant.on_message(&mut state, trimmed).await {
                    Ok(response) => ui::print_response(&response),
                    Err(e) => ui::print_error(&e.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!(
                    "{}",
                    "CTRL-C detected. Type 'exit' to end the session.".yellow()
                );
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    finish_session(&assistant, &state);
    Ok(())
}

fn finish_session(assistant: &Assistant, state: &SessionState) {
    match assistant.on_end(state) {
        Ok(Some(path)) => ui::print_saved(&path),
        Ok(None) => {}
        Err(e) => println!(
            "{}",
            format!("Warning: failed to save chat history: {}", e).yellow()
        ),
    }
}
