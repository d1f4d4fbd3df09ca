// SPDX-License-Identifier: MPL-2.0
//! Recognition service port.
//!
//! The service is an opaque HTTP endpoint. The port hands back the raw status
//! and body; interpreting them belongs to the workflow so that every
//! implementation applies the same payload contract.

use crate::domain::recognition::RecognitionRequest;
use futures_util::future::BoxFuture;
use std::fmt;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The exchange did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No response arrived within the request timeout.
    Timeout,

    /// Connection, DNS, TLS or protocol failure.
    Network(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "request timed out"),
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Client side of the food-recognition endpoint.
pub trait RecognitionService: Send + Sync {
    /// Full URL requests are posted to, used for log context.
    fn endpoint(&self) -> &str;

    /// Posts one request. Never retried.
    fn submit(
        &self,
        request: RecognitionRequest,
    ) -> BoxFuture<'static, Result<RawResponse, TransportError>>;
}
