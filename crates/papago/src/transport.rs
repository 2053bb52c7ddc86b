use std::time::Duration;

use async_trait::async_trait;
use papago_config::network::NetworkConfig;
use reqwest::redirect::Policy;

use crate::codec::WireRequest;
use crate::error::PapagoError;

/// Sends one encoded request and hands back the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: WireRequest) -> Result<Vec<u8>, PapagoError>;
}

/// reqwest-backed transport; never follows redirects
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(network: &NetworkConfig) -> Result<Self, PapagoError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(network.timeout_seconds))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: WireRequest) -> Result<Vec<u8>, PapagoError> {
        tracing::debug!(url = %request.url, body_len = request.body.len(), "POST");

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;

        let status = response.status();
        if status.is_redirection() {
            tracing::debug!(%status, "backend answered with a redirect, not following");
        } else {
            tracing::trace!(%status, "response received");
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
