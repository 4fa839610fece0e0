//! `todo`: drive a remote todo list from the terminal.
//!
//! Each invocation loads the full list, performs one action, and prints the
//! resulting list.

mod logging;
mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use todo_core::{Config, ListView, TodoId};

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Manage todos on a remote todo service")]
struct Cli {
    /// Backend base URL (defaults to $TODO_BACKEND_URL, then http://localhost:8000).
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show all todos (the default).
    List,
    /// Create a todo.
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Flip a todo between open and completed.
    Toggle {
        #[arg(value_parser = parse_id)]
        id: TodoId,
    },
    /// Delete a todo.
    Delete {
        #[arg(value_parser = parse_id)]
        id: TodoId,
    },
}

/// Digits become a numeric id, anything else stays text.
fn parse_id(raw: &str) -> Result<TodoId, std::convert::Infallible> {
    raw.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    tracing::debug!(base_url = %config.base_url, "using backend");

    let mut controller = todo_core::controller_for(&config);
    let loaded = controller.load_all().await;

    let applied = match cli.command.unwrap_or(Command::List) {
        Command::List => loaded,
        Command::Add { title, description } => {
            if title.trim().is_empty() {
                bail!("title must not be empty");
            }
            controller.set_draft_title(title);
            controller.set_draft_description(description);
            controller.submit_draft().await
        }
        Command::Toggle { id } => {
            let completed = controller
                .items()
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.completed)
                .with_context(|| format!("no todo with id {id}"))?;
            controller.toggle_completion(&id, completed).await
        }
        Command::Delete { id } => controller.delete_todo(&id).await,
    };

    println!("{}", render::render(&ListView::new(controller.state())));

    if !applied {
        bail!("request to {} failed", config.base_url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_description() {
        let cli = Cli::try_parse_from(["todo", "add", "Buy milk", "-d", "2 litres"]).unwrap();
        match cli.command {
            Some(Command::Add { title, description }) => {
                assert_eq!(title, "Buy milk");
                assert_eq!(description, "2 litres");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ids_parse_as_numbers_or_text() {
        let cli = Cli::try_parse_from(["todo", "toggle", "7"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Toggle { id: TodoId::Number(7) })));

        let cli = Cli::try_parse_from(["todo", "--base-url", "http://h:1", "delete", "ab-12"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://h:1"));
        assert!(matches!(cli.command, Some(Command::Delete { id: TodoId::Text(ref s) }) if s == "ab-12"));
    }

    #[test]
    fn typed_id_matches_numeric_and_string_server_ids() {
        let Some(Command::Toggle { id }) = Cli::try_parse_from(["todo", "toggle", "42"]).unwrap().command else {
            panic!("expected toggle");
        };
        assert_eq!(id, TodoId::Number(42));
        assert_eq!(id, TodoId::Text("42".to_string()));
    }
}
