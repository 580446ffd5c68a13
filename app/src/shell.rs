use crate::view::{render_notice, render_table};
use anyhow::Result;
use rag_client::{BackendService, ClientState, Notice};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "\
Commands:
  file <path>     select a document to upload (`file clear` drops it)
  upload          upload the selected document
  query <text>    set the query and search (alias: ask)
  search          search again with the current query
  url [value]     show or change the backend base URL
  results         show the last results table
  help            show this message
  quit            leave (alias: exit)";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    File(String),
    Upload,
    Query(String),
    Search,
    Url(Option<String>),
    Results,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "file" => Command::File(rest.to_string()),
        "upload" => Command::Upload,
        "query" | "ask" => Command::Query(rest.to_string()),
        "search" => Command::Search,
        "url" if rest.is_empty() => Command::Url(None),
        "url" => Command::Url(Some(rest.to_string())),
        "results" => Command::Results,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    };
    Some(command)
}

pub struct Shell {
    state: ClientState,
    backend: BackendService,
}

impl Shell {
    pub fn new(state: ClientState, backend: BackendService) -> Self {
        Self { state, backend }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("📄 RAG Document Assistant");
        println!("Backend: {}", display_url(&self.state.base_url));
        println!("Type `help` for commands.");

        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let Some(command) = parse_command(&line) else {
                continue;
            };
            if command == Command::Quit {
                break;
            }

            let output = self.handle(command).await;
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
        }

        Ok(())
    }

    /// Applies one command to the state and returns what to print.
    pub async fn handle(&mut self, command: Command) -> String {
        match command {
            Command::File(path) if path.is_empty() => match &self.state.file {
                Some(file) => format!("Selected: {} ({} bytes)", file.filename, file.bytes.len()),
                None => "No file selected".to_string(),
            },
            Command::File(path) if path == "clear" => {
                self.state.clear_file();
                "No file selected".to_string()
            }
            Command::File(path) => match self.state.select_path(&path).await {
                Ok(()) => match &self.state.file {
                    Some(file) => format!("Selected: {} ({} bytes)", file.filename, file.bytes.len()),
                    None => String::new(),
                },
                Err(err) => render_notice(&Notice::error(err.detail())),
            },
            Command::Upload => render_notice(&self.state.upload(&self.backend).await),
            Command::Query(text) => {
                self.state.set_query(text);
                self.search().await
            }
            Command::Search => self.search().await,
            Command::Url(None) => format!("Backend: {}", display_url(&self.state.base_url)),
            Command::Url(Some(url)) => {
                self.state.set_base_url(url);
                format!("Backend: {}", display_url(&self.state.base_url))
            }
            Command::Results => results_output(&self.state),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
            Command::Unknown(word) => format!("Unknown command `{}`. Type `help`.", word),
        }
    }

    async fn search(&mut self) -> String {
        match self.state.submit_query(&self.backend).await {
            Some(notice) => render_notice(&notice),
            None => results_output(&self.state),
        }
    }
}

fn results_output(state: &ClientState) -> String {
    if state.results.is_empty() {
        "No results.".to_string()
    } else {
        render_table(&state.results)
    }
}

fn display_url(base_url: &str) -> &str {
    if base_url.is_empty() {
        "(not set)"
    } else {
        base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rag_client::{ResultRow, UploadFile};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("file ./docs/policy.pdf"),
            Some(Command::File("./docs/policy.pdf".to_string()))
        );
        assert_eq!(
            parse_command("  ask   is knee surgery covered?  "),
            Some(Command::Query("is knee surgery covered?".to_string()))
        );
        assert_eq!(
            parse_command("url http://127.0.0.1:8000"),
            Some(Command::Url(Some("http://127.0.0.1:8000".to_string())))
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("UPLOAD"), Some(Command::Upload));
        assert_eq!(parse_command("url"), Some(Command::Url(None)));
        assert_eq!(parse_command("query"), Some(Command::Query(String::new())));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(parse_command("   "), None);
        assert_eq!(
            parse_command("delete everything"),
            Some(Command::Unknown("delete".to_string()))
        );
    }

    #[tokio::test]
    async fn url_command_edits_base_url() {
        let mut shell = Shell::new(ClientState::default(), BackendService::new());

        assert_eq!(shell.handle(Command::Url(None)).await, "Backend: (not set)");
        assert_eq!(
            shell.handle(Command::Url(Some("http://localhost:8000".to_string()))).await,
            "Backend: http://localhost:8000"
        );
        assert_eq!(shell.state.base_url, "http://localhost:8000");
    }

    #[tokio::test]
    async fn empty_query_prints_validation_notice() {
        let mut shell = Shell::new(ClientState::new("http://127.0.0.1:9"), BackendService::new());
        let output = shell.handle(Command::Query(String::new())).await;
        assert!(output.contains("Please enter a query"));
    }

    #[tokio::test]
    async fn upload_without_file_prints_notice() {
        let mut shell = Shell::new(ClientState::new("http://127.0.0.1:9"), BackendService::new());
        let output = shell.handle(Command::Upload).await;
        assert!(output.contains("select a file"));
    }

    #[tokio::test]
    async fn results_command_shows_table_or_placeholder() {
        let mut shell = Shell::new(ClientState::default(), BackendService::new());
        assert_eq!(shell.handle(Command::Results).await, "No results.");

        shell.state.results = vec![ResultRow {
            document_id: "d1".to_string(),
            ..ResultRow::default()
        }];
        assert!(shell.handle(Command::Results).await.contains("| d1"));
    }

    #[tokio::test]
    async fn file_without_path_reports_selection() {
        let mut shell = Shell::new(ClientState::default(), BackendService::new());
        assert_eq!(shell.handle(Command::File(String::new())).await, "No file selected");

        shell.state.select_file(UploadFile::new("a.txt", b"abc".to_vec()));
        assert_eq!(
            shell.handle(Command::File(String::new())).await,
            "Selected: a.txt (3 bytes)"
        );
    }

    #[tokio::test]
    async fn file_clear_drops_selection() {
        let mut shell = Shell::new(ClientState::default(), BackendService::new());
        shell.state.select_file(UploadFile::new("a.txt", b"abc".to_vec()));

        assert_eq!(
            shell.handle(Command::File("clear".to_string())).await,
            "No file selected"
        );
        assert!(shell.state.file.is_none());
    }
}
