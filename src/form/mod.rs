pub mod user;

use reqwest::Method;
use url::Url;

pub use user::RegisterFormData;

#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("invalid form action `{action}`: {source}")]
    Action {
        action: String,
        source: url::ParseError,
    },
    #[error("invalid form method `{0}`")]
    Method(String),
}

/// Where and how the form submits: its declared `action` and `method`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub action: Url,
    pub method: Method,
}

impl FormTarget {
    /// Parses the declared action and method. An empty method means `POST`.
    pub fn new(action: &str, method: &str) -> Result<Self, TargetError> {
        let action = Url::parse(action).map_err(|source| TargetError::Action {
            action: action.to_string(),
            source,
        })?;

        let method = match method.trim() {
            "" => Method::POST,
            m => Method::from_bytes(m.to_ascii_uppercase().as_bytes())
                .map_err(|_| TargetError::Method(m.to_string()))?,
        };

        Ok(Self { action, method })
    }

    /// Resolves a redirect from the server against the form action, the way a
    /// browser resolves a relative `location.href`.
    pub fn resolve(&self, location: &str) -> String {
        match self.action.join(location) {
            Ok(url) => url.to_string(),
            Err(_) => location.to_string(),
        }
    }
}
