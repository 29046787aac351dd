use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// A canned question, submitted through the normal turn pipeline.
pub struct QuickActionCommand {
    name: &'static str,
    description: String,
    phrase: &'static str,
}

impl QuickActionCommand {
    pub fn new(name: &'static str, label: &str, phrase: &'static str) -> Self {
        Self {
            name,
            description: format!("{label}: ask \"{phrase}\""),
            phrase,
        }
    }
}

#[async_trait]
impl Command for QuickActionCommand {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Submit(self.phrase.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn submits_phrase() {
        let cmd = QuickActionCommand::new("/payment", "💳 Payment", "Payment methods");
        assert_eq!(
            cmd.execute(&test_info()).await,
            CommandResult::Submit("Payment methods".to_string())
        );
    }

    #[test]
    fn description_mentions_phrase() {
        let cmd = QuickActionCommand::new("/contact", "📞 Contact", "Contact support");
        assert_eq!(cmd.name(), "/contact");
        assert!(cmd.description().contains("Contact support"));
    }
}
