// SPDX-License-Identifier: MPL-2.0
//! `reqwest` client for the recognition endpoint.
//!
//! One POST per submission, no retry. Every status code is handed back to the
//! workflow; only failures to complete the exchange are errors here.

use crate::app::config::defaults::{CAPTURE_ENDPOINT_PATH, REQUEST_TIMEOUT_MS};
use crate::application::port::{RawResponse, RecognitionService, TransportError};
use crate::domain::recognition::RecognitionRequest;
use crate::error::{Error, Result};
use crate::workflow::contract;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// Extra header sent with every request, typically to get past a tunnel's
/// browser warning page.
#[derive(Debug, Clone)]
pub struct BypassHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl BypassHeader {
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the name or value is not a valid HTTP header.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Config(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("invalid header value for '{name}': {e}")))?;
        Ok(Self { name, value })
    }
}

#[derive(Debug, Clone)]
pub struct HttpRecognitionService {
    client: reqwest::Client,
    endpoint: String,
    bypass: Option<BypassHeader>,
    timeout: Duration,
}

impl HttpRecognitionService {
    /// Creates a client posting to `{base_url}/api/capture`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, bypass: Option<BypassHeader>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("NutraScan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint_url(base_url),
            bypass,
            timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        })
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Joins the base URL and the capture path without doubling slashes.
#[must_use]
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{CAPTURE_ENDPOINT_PATH}", base_url.trim_end_matches('/'))
}

fn classify(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

impl RecognitionService for HttpRecognitionService {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn submit(
        &self,
        request: RecognitionRequest,
    ) -> BoxFuture<'static, std::result::Result<RawResponse, TransportError>> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(bypass) = &self.bypass {
            builder = builder.header(bypass.name.clone(), bypass.value.clone());
        }

        async move {
            let body = contract::request_body(&request)
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let response = builder.body(body).send().await.map_err(|e| classify(&e))?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(|e| classify(&e))?;
            Ok(RawResponse {
                status,
                body: body.to_vec(),
            })
        }
        .boxed()
    }
}
