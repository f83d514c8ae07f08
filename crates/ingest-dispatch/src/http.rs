//! HTTP dispatcher posting JSON envelopes to the ingestion endpoint.

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::result::DispatchResult;
use crate::Dispatcher;
use async_trait::async_trait;
use ingest_generator::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::{debug, info};

/// Sends each envelope as one `POST <endpoint>` with a JSON body.
///
/// The client is built once and shared by every unit of a run, so
/// connections are pooled. No timeout is configured beyond reqwest's defaults.
pub struct HttpDispatcher {
    client: Client,
    endpoint: Url,
    capture_body: bool,
}

impl HttpDispatcher {
    /// Build a dispatcher from its configuration.
    ///
    /// Fails only on configuration problems (bad URL, unsendable header).
    pub fn new(config: &DispatchConfig) -> Result<Self, DispatchError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| DispatchError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let headers = build_headers(config)?;
        let client = Client::builder().default_headers(headers).build()?;

        debug!("HTTP dispatcher targeting {endpoint}");

        Ok(Self {
            client,
            endpoint,
            capture_body: config.capture_body,
        })
    }
}

fn build_headers(config: &DispatchConfig) -> Result<HeaderMap, DispatchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = &config.auth_token {
        let mut value = HeaderValue::from_str(token).map_err(|e| DispatchError::InvalidHeader {
            name: AUTHORIZATION.to_string(),
            reason: e.to_string(),
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in &config.extra_headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| DispatchError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| DispatchError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn send(&self, envelope: &Envelope) -> DispatchResult {
        let body = match envelope.to_json() {
            Ok(body) => body,
            Err(e) => return DispatchResult::Error(format!("Failed to serialize envelope: {e}")),
        };

        let response = match self
            .client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return DispatchResult::Error(e.to_string()),
        };

        let status = response.status().as_u16();
        if self.capture_body {
            match response.text().await {
                Ok(text) => info!("Response status: {status} body: {text}"),
                Err(e) => debug!("Response status: {status} (body unreadable: {e})"),
            }
        }

        DispatchResult::Status(status)
    }
}
