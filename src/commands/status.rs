use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn description(&self) -> &str {
        "show mode, model, and API key status"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  mode      {}", info.mode);
        println!("  model     {}", info.model);
        println!("  api key   {}", info.api_status);
        println!("  messages  {}", info.transcript.len());
        CommandResult::Handled
    }
}
