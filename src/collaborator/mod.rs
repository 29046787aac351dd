pub mod groq;
pub mod mock;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::CollaboratorError;
use crate::session::Turn;

/// Token usage from a single collaborator call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Accumulate another usage into this one.
    pub fn add(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }

    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Free-text answer from the collaborator plus optional token usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// A hosted model consulted when local rules have nothing to say.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// `history` is oldest first and excludes `user_text`.
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_text: &str,
    ) -> Result<Reply, CollaboratorError>;

    /// Whether a credential is configured. Shown in the banner.
    fn is_configured(&self) -> bool {
        true
    }

    fn model(&self) -> &str;
}

/// Lets a caller keep a handle on a collaborator it hands to the engine.
#[async_trait]
impl<C: Collaborator + ?Sized> Collaborator for Arc<C> {
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_text: &str,
    ) -> Result<Reply, CollaboratorError> {
        (**self).generate(system_prompt, history, user_text).await
    }

    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn model(&self) -> &str {
        (**self).model()
    }
}
