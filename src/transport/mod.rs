// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport abstraction for submitting Courier requests.
//!
//! The client talks to the network through the [`Transport`] trait, so the
//! HTTP stack can be swapped for a deterministic test double. The default
//! implementation is [`HttpTransport`] over `reqwest`.

mod http;

pub use http::HttpTransport;

use crate::error::{RequestError, TransportError};
use crate::request::Request;

/// Raw response produced by a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportResponse {
    status: Option<u16>,
    payload: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response from a status code and payload.
    ///
    /// `status` is `None` when the transport completed but could not
    /// produce a well-formed response.
    #[must_use]
    pub fn new(status: Option<u16>, payload: Vec<u8>) -> Self {
        Self { status, payload }
    }

    /// Returns the HTTP status code, if one was produced.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the response payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Trait for transports that can submit a Courier request.
///
/// Each call submits the request exactly once and the returned future
/// resolves exactly once. Implementations decide their own timeout,
/// redirect, and scheduling policy; nothing is layered on top here.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Submits the request and resolves with the raw result.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request never completed at the
    /// transport level (connection failure, TLS error, and the like).
    async fn send(&self, request: &Request) -> Result<TransportResponse, TransportError>;
}

/// Maps a raw transport result onto the outcome reported to callers.
///
/// A transport-level error always takes precedence over status
/// inspection. A status in the 2xx range is success; anything else,
/// including a missing status, is [`RequestError::UnexpectedStatus`].
pub(crate) fn outcome(
    result: Result<TransportResponse, TransportError>,
) -> Result<(), RequestError> {
    match result {
        Err(error) => Err(RequestError::Transport(error)),
        Ok(response) => match response.status() {
            Some(code) if (200..=299).contains(&code) => Ok(()),
            other => Err(RequestError::UnexpectedStatus(other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: Option<u16>) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse::new(status, Vec::new()))
    }

    #[test]
    fn status_200_is_success() {
        assert!(outcome(response(Some(200))).is_ok());
    }

    #[test]
    fn any_2xx_is_success() {
        for code in [201, 204, 226, 299] {
            assert!(outcome(response(Some(code))).is_ok(), "status {code}");
        }
    }

    #[test]
    fn status_outside_2xx_is_unexpected() {
        for code in [199, 300, 301, 404, 500] {
            assert!(
                matches!(
                    outcome(response(Some(code))),
                    Err(RequestError::UnexpectedStatus(Some(c))) if c == code
                ),
                "status {code}"
            );
        }
    }

    #[test]
    fn missing_status_is_unexpected_with_no_code() {
        assert!(matches!(
            outcome(response(None)),
            Err(RequestError::UnexpectedStatus(None))
        ));
    }

    #[test]
    fn transport_error_takes_precedence() {
        let result = outcome(Err(TransportError::Other("connection reset".to_string())));
        assert!(matches!(
            result,
            Err(RequestError::Transport(TransportError::Other(message))) if message == "connection reset"
        ));
    }
}
