use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "/history"
    }

    fn description(&self) -> &str {
        "print the conversation so far"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        if info.transcript.is_empty() {
            println!("  (no messages)");
        }
        for turn in info.transcript {
            println!("  {turn}");
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;
    use crate::session::Turn;

    #[tokio::test]
    async fn returns_handled_empty() {
        assert_eq!(
            HistoryCommand.execute(&test_info()).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn returns_handled_with_turns() {
        let turns = vec![Turn::bot("welcome"), Turn::user("refund?")];
        let info = SessionInfo {
            transcript: &turns,
            ..test_info()
        };
        assert_eq!(HistoryCommand.execute(&info).await, CommandResult::Handled);
    }
}
