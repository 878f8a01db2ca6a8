pub mod http;

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

pub use http::HttpTransport;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// One script-initiated form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, &'static str)>,
    pub fields: Vec<(&'static str, String)>,
}

impl SubmissionRequest {
    pub fn new(method: Method, url: Url, fields: Vec<(&'static str, String)>) -> Self {
        Self {
            method,
            url,
            headers: vec![(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)],
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request with method {0} cannot have a body")]
    BodyNotAllowed(Method),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("network response was not ok: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Carries a submission to the server and hands back whatever came back.
#[async_trait]
pub trait Transport {
    async fn send(&self, request: SubmissionRequest) -> Result<RawResponse, TransportError>;
}
