use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::errors::AppError;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PORT: u16 = 8080;

/// Application configuration loaded from environment variables.
///
/// The API key is optional here so that commands which never reach the model
/// (`render`) can run without it. Model-backed commands call [`Config::api_key`],
/// which fails before any network call is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub prompts_dir: Option<PathBuf>,
    /// Raw `PORT`, validated by [`Config::port`] only when serving.
    pub port: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            google_api_key: optional_env(API_KEY_VAR),
            model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            prompts_dir: optional_env("CATALYST_PROMPTS_DIR").map(PathBuf::from),
            port: optional_env("PORT"),
        }
    }

    /// Listening port for `serve`, defaulting to 8080.
    pub fn port(&self) -> Result<u16> {
        match &self.port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'")),
            None => Ok(DEFAULT_PORT),
        }
    }

    /// Returns the credential or a `MissingCredential` error.
    pub fn api_key(&self) -> Result<&str, AppError> {
        self.google_api_key
            .as_deref()
            .ok_or(AppError::MissingCredential(API_KEY_VAR))
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
