pub mod banner;
pub mod collaborator;
pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod prompts;
pub mod responder;
pub mod session;
pub mod spinner;
pub mod telemetry;
