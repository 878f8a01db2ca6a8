use async_trait::async_trait;
use reqwest::{multipart, Client, Method};

use super::{RawResponse, SubmissionRequest, Transport, TransportError};

/// Sends submissions as `multipart/form-data` over HTTP.
///
/// No timeout is set: a request runs until the server answers or the
/// connection fails.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build_form(request: &SubmissionRequest) -> multipart::Form {
        request
            .fields
            .iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(*name, value.clone())
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: SubmissionRequest) -> Result<RawResponse, TransportError> {
        if request.method == Method::GET || request.method == Method::HEAD {
            return Err(TransportError::BodyNotAllowed(request.method));
        }

        let form = Self::build_form(&request);
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .multipart(form);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }

        log::debug!("{} {}", request.method, request.url);

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
