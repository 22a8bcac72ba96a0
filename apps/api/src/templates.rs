//! Prompt template loading and rendering.
//!
//! Templates are compiled in (see `pipeline::prompts`). A prompts directory
//! can override any of them file by file, which lets prompt wording change
//! without a rebuild.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::errors::AppError;
use crate::pipeline::prompts;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder regex"));

/// Named values bound into a template.
pub type Vars = HashMap<&'static str, String>;

/// Source of prompt templates: built-in, optionally overridden from a directory.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    dir: Option<PathBuf>,
}

impl PromptLibrary {
    pub fn builtin() -> Self {
        Self { dir: None }
    }

    /// Serves `<dir>/<name>` when present, the built-in template otherwise.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(AppError::TemplateNotFound(dir.display().to_string()));
        }
        Ok(Self { dir: Some(dir) })
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn load(&self, name: &str) -> Result<Cow<'static, str>, AppError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(name);
            if path.is_file() {
                debug!("Loading prompt template override from {}", path.display());
                return Ok(Cow::Owned(std::fs::read_to_string(&path)?));
            }
        }

        prompts::builtin(name).map(Cow::Borrowed).ok_or_else(|| {
            let location = match &self.dir {
                Some(dir) => dir.join(name).display().to_string(),
                None => name.to_string(),
            };
            AppError::TemplateNotFound(location)
        })
    }
}

/// Replaces each `{name}` with its bound value in a single pass, so values that
/// themselves contain braces are never re-expanded. Unbound placeholders stay.
pub fn render(template: &str, vars: &Vars) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
