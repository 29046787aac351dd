//! Per-session chat transcript.
//!
//! The session is plain data handed into each turn and handed back out;
//! nothing global holds it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.role {
            Role::User => "you",
            Role::Bot => "bot",
        };
        write!(f, "{who}> {}", self.content)
    }
}

/// Ordered, append-only transcript seeded with a bot greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    greeting: String,
    transcript: Vec<Turn>,
}

impl Session {
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            transcript: vec![Turn::bot(greeting.clone())],
            greeting,
        }
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn push(&mut self, turn: Turn) {
        self.transcript.push(turn);
    }

    /// Drop everything but the seeded greeting.
    pub fn reset(mut self) -> Self {
        self.transcript.clear();
        self.transcript.push(Turn::bot(self.greeting.clone()));
        self
    }

    /// The last `window` turns, oldest first.
    pub fn recent(&self, window: usize) -> &[Turn] {
        let start = self.transcript.len().saturating_sub(window);
        &self.transcript[start..]
    }

    pub fn count(&self, role: Role) -> usize {
        self.transcript.iter().filter(|t| t.role == role).count()
    }

    pub fn last_reply(&self) -> Option<&str> {
        self.transcript
            .iter()
            .rev()
            .find(|t| t.role == Role::Bot)
            .map(|t| t.content.as_str())
    }
}
