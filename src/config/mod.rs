use std::str::FromStr;

use crate::controller::SubmitMode;
use crate::form::{FormTarget, TargetError};

pub const DEFAULT_ACTION: &str = "http://127.0.0.1:5000/register";
pub const DEFAULT_METHOD: &str = "POST";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error("unknown submit mode `{0}`, expected `submit` or `validate`")]
    Mode(String),
}

impl FromStr for SubmitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "submit" => Ok(SubmitMode::Submit),
            "validate" | "validate-only" => Ok(SubmitMode::ValidateOnly),
            other => Err(ConfigError::Mode(other.to_string())),
        }
    }
}

/// Form settings, read from `REGISTER_ACTION`, `REGISTER_METHOD` and
/// `REGISTER_MODE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub action: String,
    pub method: String,
    pub mode: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            action: DEFAULT_ACTION.to_string(),
            method: DEFAULT_METHOD.to_string(),
            mode: "submit".to_string(),
        }
    }
}

impl Settings {
    /// Initialize settings based on the process environment. Unset variables
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            action: lookup("REGISTER_ACTION").unwrap_or(defaults.action),
            method: lookup("REGISTER_METHOD").unwrap_or(defaults.method),
            mode: lookup("REGISTER_MODE").unwrap_or(defaults.mode),
        }
    }

    pub fn target(&self) -> Result<FormTarget, ConfigError> {
        Ok(FormTarget::new(&self.action, &self.method)?)
    }

    pub fn submit_mode(&self) -> Result<SubmitMode, ConfigError> {
        self.mode.parse()
    }
}
