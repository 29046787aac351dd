//! Collaborator configuration from the environment and `.env` files.
//!
//! Values come from a `.env` file (the working directory's, or an explicit
//! path) overlaid by the process environment, so exported variables win.
//! The process environment itself is never modified.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::consts::{
    API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_P,
};

pub const MODEL_ENV: &str = "GROQ_MODEL";
pub const ENDPOINT_ENV: &str = "GROQ_ENDPOINT";
pub const TEMPERATURE_ENV: &str = "GROQ_TEMPERATURE";
pub const MAX_TOKENS_ENV: &str = "GROQ_MAX_TOKENS";
pub const TIMEOUT_ENV: &str = "GROQ_TIMEOUT_SECS";

/// Everything the Groq collaborator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CollaboratorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub timeout_secs: u64,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CollaboratorConfig {
    /// Build from key/value pairs. Unknown keys are ignored, empty values
    /// count as unset.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        let defaults = Self::default();

        Ok(Self {
            api_key: vars.get(API_KEY_ENV).map(|k| k.trim().to_string()),
            model: vars.get(MODEL_ENV).cloned().unwrap_or(defaults.model),
            endpoint: vars.get(ENDPOINT_ENV).cloned().unwrap_or(defaults.endpoint),
            temperature: parse_var(&vars, TEMPERATURE_ENV)?.unwrap_or(defaults.temperature),
            max_tokens: parse_var(&vars, MAX_TOKENS_ENV)?.unwrap_or(defaults.max_tokens),
            top_p: defaults.top_p,
            timeout_secs: parse_var(&vars, TIMEOUT_ENV)?.unwrap_or(defaults.timeout_secs),
        })
    }

    /// Load from `env_file` (or `./.env` if present) plus the process
    /// environment.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let mut vars = HashMap::new();
        match env_file {
            Some(path) => {
                let iter = dotenvy::from_path_iter(path)
                    .with_context(|| format!("failed to open env file {}", path.display()))?;
                for item in iter {
                    let (key, value) = item
                        .with_context(|| format!("failed to parse env file {}", path.display()))?;
                    vars.insert(key, value);
                }
            }
            None => {
                // A missing ./.env is normal.
                if let Ok(iter) = dotenvy::dotenv_iter() {
                    for (key, value) in iter.flatten() {
                        vars.insert(key, value);
                    }
                }
            }
        }
        vars.extend(std::env::vars());
        Self::from_vars(vars)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<T>(vars: &HashMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    vars.get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = CollaboratorConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, CollaboratorConfig::default());
        assert!(!config.has_api_key());
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn reads_known_keys() {
        let config = CollaboratorConfig::from_vars(vars(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("GROQ_TEMPERATURE", "0.2"),
            ("GROQ_MAX_TOKENS", "256"),
            ("GROQ_TIMEOUT_SECS", "5"),
            ("UNRELATED", "x"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn empty_api_key_is_unset() {
        let config = CollaboratorConfig::from_vars(vars(&[("GROQ_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn invalid_number_names_variable() {
        let err = CollaboratorConfig::from_vars(vars(&[("GROQ_MAX_TOKENS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("GROQ_MAX_TOKENS"));
    }

    #[test]
    fn loads_explicit_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GROQ_MODEL=from-file-model").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "GROQ_MAX_TOKENS=123").unwrap();

        let config = CollaboratorConfig::load(Some(file.path())).unwrap();
        // Process environment may override, but these keys are not exported in tests.
        if std::env::var(MODEL_ENV).is_err() {
            assert_eq!(config.model, "from-file-model");
        }
        if std::env::var(MAX_TOKENS_ENV).is_err() {
            assert_eq!(config.max_tokens, 123);
        }
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CollaboratorConfig::load(Some(&dir.path().join("nope.env")));
        assert!(result.is_err());
    }
}
