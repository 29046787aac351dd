//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and dynamic help generation. Quick actions are commands too: they hand a
//! canned phrase back to the REPL, which submits it like typed input.

mod clear;
mod help;
mod history;
mod quick;
mod quit;
mod status;
mod tokens;

use async_trait::async_trait;
use std::sync::Arc;

use crate::collaborator::TokenUsage;
use crate::consts::QUICK_ACTIONS;
use crate::session::Turn;

pub use quick::QuickActionCommand;

/// Session info available to commands during execution.
pub struct SessionInfo<'a> {
    pub mode: &'a str,
    pub model: &'a str,
    pub api_status: &'a str,
    pub usage: TokenUsage,
    pub transcript: &'a [Turn],
}

/// What the REPL should do after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command; pass input to the engine.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Submit this text as if the user had typed it.
    Submit(String),
    /// Reset the transcript to the greeting.
    Clear,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/status"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command.
    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands and quick actions.
    pub fn new() -> Self {
        let mut commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(status::StatusCommand),
            Arc::new(history::HistoryCommand),
            Arc::new(tokens::TokensCommand),
            Arc::new(clear::ClearCommand),
        ];
        for &(name, label, phrase) in QUICK_ACTIONS {
            commands.push(Arc::new(QuickActionCommand::new(name, label, phrase)));
        }
        commands.push(Arc::new(quit::QuitCommand));
        Self { commands }
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let cmd = input.trim();

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}
