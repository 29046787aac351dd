use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Collaborator, Reply};
use crate::error::CollaboratorError;
use crate::session::Turn;

/// What a scripted call should produce.
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply(Reply),
    Fail(String),
    MissingCredential,
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub system_prompt: String,
    pub history: Vec<Turn>,
    pub user_text: String,
}

/// A scripted collaborator for tests. Returns pre-defined outcomes in order
/// and records every request.
pub struct MockCollaborator {
    script: Vec<Scripted>,
    index: AtomicUsize,
    calls: Mutex<Vec<Call>>,
}

impl MockCollaborator {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script,
            index: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: one reply per string.
    pub fn replying(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| Scripted::Reply(Reply::text(*t)))
                .collect(),
        )
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Collaborator for MockCollaborator {
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_text: &str,
    ) -> Result<Reply, CollaboratorError> {
        self.calls.lock().unwrap().push(Call {
            system_prompt: system_prompt.to_string(),
            history: history.to_vec(),
            user_text: user_text.to_string(),
        });

        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.script.get(i) {
            Some(Scripted::Reply(reply)) => Ok(reply.clone()),
            Some(Scripted::Fail(message)) => Err(CollaboratorError::Unavailable(message.clone())),
            Some(Scripted::MissingCredential) => Err(CollaboratorError::MissingCredential {
                env_var: crate::consts::API_KEY_ENV,
            }),
            None => Err(CollaboratorError::Unavailable(format!(
                "MockCollaborator: no more replies (called {} times)",
                i + 1
            ))),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
