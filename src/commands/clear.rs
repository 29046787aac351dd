use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn aliases(&self) -> &[&str] {
        &["/new"]
    }

    fn description(&self) -> &str {
        "clear chat history"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[test]
    fn metadata() {
        assert_eq!(ClearCommand.name(), "/clear");
        assert_eq!(ClearCommand.aliases(), &["/new"]);
        assert!(!ClearCommand.description().is_empty());
    }

    #[tokio::test]
    async fn returns_clear() {
        assert_eq!(ClearCommand.execute(&test_info()).await, CommandResult::Clear);
    }
}
