// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default HTTP transport over `reqwest`.

use reqwest::Client;

use crate::error::TransportError;
use crate::request::{Method, Request};
use crate::transport::{Transport, TransportResponse};

/// HTTP transport backed by a `reqwest` client.
///
/// Cloning shares the underlying connection pool, so one transport can be
/// handed to several Courier clients.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build().map_err(TransportError::Http)?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, sharing its connection pool.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<TransportResponse, TransportError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let mut builder = match request.method() {
            Method::Put => self.client.put(request.url()),
            Method::Delete => self.client.delete(request.url()),
        };
        for (name, value) in request.headers() {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder
            .body(request.body().to_vec())
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status().as_u16();
        let payload = response
            .bytes()
            .await
            .map_err(TransportError::Http)?
            .to_vec();

        tracing::debug!(status, "received response");

        Ok(TransportResponse::new(Some(status), payload))
    }
}
