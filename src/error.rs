//! Collaborator errors and their user-facing rendering.
//!
//! None of these escape a turn: the engine renders them with [`diagnostic`]
//! and shows the result as the bot's reply.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// No API key configured.
    #[error("no API key configured (set {env_var})")]
    MissingCredential { env_var: &'static str },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("service returned an empty response")]
    EmptyResponse,

    #[error("{0}")]
    Unavailable(String),
}

/// Reply text shown in place of an answer when the collaborator fails.
pub fn diagnostic(err: &CollaboratorError) -> String {
    match err {
        CollaboratorError::MissingCredential { env_var } => format!(
            "⚠️ **API Key Missing!**\n\n\
             Please add your Groq API key to the `.env` file:\n\
             ```\n{env_var}=your_key_here\n```\n\n\
             🔑 Get your free key at: https://console.groq.com"
        ),
        other => format!(
            "⚠️ **Error:** {other}\n\n\
             Please check:\n\
             1. Your API key is valid\n\
             2. You have internet connection\n\
             3. Groq service is available"
        ),
    }
}
