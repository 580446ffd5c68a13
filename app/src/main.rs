//! # RAG Desk (`rag-desk`)
//!
//! Terminal front end for a retrieval-augmented-generation backend. Upload a
//! document, ask questions about it, and read the answers as a table of
//! document id, theme, extracted answer and citations.
//!
//! The backend base URL comes from `RAG_API_URL` (a `.env` file is honored)
//! and can be overridden with `--base-url` or, inside the shell, `url <value>`.
//!
//! ```bash
//! rag-desk --base-url http://127.0.0.1:8000 upload ./policy.pdf
//! rag-desk query "Is knee surgery covered?"
//! rag-desk            # interactive shell
//! ```

mod shell;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rag_client::config::BASE_URL_ENV;
use rag_client::{BackendService, ClientConfig, ClientState, Notice, NoticeLevel};
use shell::Shell;
use std::path::PathBuf;
use view::{render_notice, render_table};

#[derive(Parser)]
#[command(
    name = "rag-desk",
    about = "Upload documents to a RAG backend and query them",
    version
)]
struct Cli {
    /// Backend base URL. Defaults to the RAG_API_URL environment variable.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload one document to `{base_url}/upload/`.
    Upload {
        /// Path of the document to send.
        path: PathBuf,
    },

    /// Ask one question and print the results table.
    Query {
        /// Natural-language question.
        text: String,
    },

    /// Interactive session (the default).
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables (.env included) before logging reads RUST_LOG
    let config = ClientConfig::from_env().with_base_url(cli.base_url);
    env_logger::init();

    if config.base_url.is_empty() {
        log::warn!("{} is not set; backend base URL starts empty", BASE_URL_ENV);
    }
    log::debug!("Using backend base URL {:?}", config.base_url);

    let mut state = ClientState::new(config.base_url);
    let backend = BackendService::new();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Upload { path } => {
            if let Err(err) = state.select_path(&path).await {
                eprintln!("{}", render_notice(&Notice::error(err.detail())));
                std::process::exit(1);
            }
            let notice = state.upload(&backend).await;
            println!("{}", render_notice(&notice));
            if notice.level != NoticeLevel::Info {
                std::process::exit(1);
            }
        }
        Commands::Query { text } => {
            state.set_query(text);
            match state.submit_query(&backend).await {
                Some(notice) => {
                    eprintln!("{}", render_notice(&notice));
                    std::process::exit(1);
                }
                None if state.results.is_empty() => println!("No results."),
                None => print!("{}", render_table(&state.results)),
            }
        }
        Commands::Shell => Shell::new(state, backend).run().await?,
    }

    Ok(())
}
