// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Courier client façade.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{ConfigError, Error, RequestError};
use crate::request::{Method, RequestBuilder};
use crate::store::{MemoryStore, TokenStore};
use crate::token::DeviceToken;
use crate::transport::{self, HttpTransport, Transport};

/// Client for the Courier push notification API.
///
/// A client subscribes a device token to named channels and unsubscribes
/// it again. The last-used token is persisted in the injected
/// [`TokenStore`] under a key scoped to the configured API token, so later
/// [`subscribe`](Client::subscribe) calls can omit it.
///
/// The client itself is stateless across calls; each operation issues
/// exactly one HTTP request and resolves with exactly one outcome. No
/// retries, no timeouts, and no cancellation are added on top of the
/// transport's own behavior.
///
/// # Examples
///
/// ```no_run
/// use courier_lib::{Client, Config, DeviceToken, Environment};
///
/// # async fn example(apns_token: Vec<u8>) -> courier_lib::Result<()> {
/// let client = Client::new(Config::new("api_key", Environment::Production))?;
///
/// // First subscription registers the device token.
/// client
///     .subscribe_with_token("breaking-news", &DeviceToken::new(apns_token))
///     .await?;
///
/// // Later calls reuse the stored token.
/// client.subscribe("sports").await?;
/// client.unsubscribe("breaking-news").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport, S = MemoryStore> {
    config: Config,
    builder: RequestBuilder,
    transport: Arc<T>,
    store: S,
    token_key: String,
}

impl Client {
    /// Creates a client with the default HTTP transport and a fresh
    /// in-memory token store.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is malformed or the HTTP client
    /// cannot be created.
    pub fn new(config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_parts(config, transport, MemoryStore::new())?)
    }
}

impl<T: Transport, S: TokenStore> Client<T, S> {
    /// Creates a client with an injected transport and token store.
    ///
    /// Both collaborators may be shared: hand out clones of a transport to
    /// reuse its connections, or of a store to share the persisted token
    /// between clients.
    ///
    /// # Errors
    ///
    /// Returns error if the configured base URL is malformed. This is the
    /// only configuration that can fail; every later per-call request
    /// assembly is infallible.
    pub fn with_parts(config: Config, transport: T, store: S) -> Result<Self, ConfigError> {
        let builder = RequestBuilder::new(&config)?;
        let token_key = config.device_token_key();
        Ok(Self {
            config,
            builder,
            transport: Arc::new(transport),
            store,
            token_key,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the persisted device token, if one has been stored.
    #[must_use]
    pub fn device_token(&self) -> Option<DeviceToken> {
        self.store.get(&self.token_key).map(DeviceToken::new)
    }

    /// Persists `token` as the device token for this client's API token.
    pub fn set_device_token(&self, token: &DeviceToken) {
        self.store.set(&self.token_key, Some(token.as_bytes()));
    }

    /// Removes the persisted device token.
    pub fn clear_device_token(&self) {
        self.store.set(&self.token_key, None);
    }

    /// Subscribes the stored device token to `channel`.
    ///
    /// # Panics
    ///
    /// Panics if no device token has been stored. Register one first with
    /// [`subscribe_with_token`](Client::subscribe_with_token) or
    /// [`set_device_token`](Client::set_device_token); calling this
    /// without a token is caller misuse, not a runtime condition.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the transport fails or the API answers
    /// with a status outside the 2xx range.
    pub async fn subscribe(&self, channel: &str) -> Result<(), RequestError> {
        let Some(token) = self.device_token() else {
            panic!(
                "cannot subscribe to a channel without a device token; \
                 store one with `set_device_token` or call `subscribe_with_token` first"
            );
        };
        self.subscribe_with_token(channel, &token).await
    }

    /// Stores `token` as the device token, then subscribes it to `channel`.
    ///
    /// The token is persisted before the request is dispatched, so the
    /// store reflects the caller's intent even if the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the transport fails or the API answers
    /// with a status outside the 2xx range.
    pub async fn subscribe_with_token(
        &self,
        channel: &str,
        token: &DeviceToken,
    ) -> Result<(), RequestError> {
        self.set_device_token(token);
        self.dispatch(Method::Put, channel, token).await
    }

    /// Unsubscribes the stored device token from `channel`.
    ///
    /// The stored token is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if no device token has been stored, as for
    /// [`subscribe`](Client::subscribe).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the transport fails or the API answers
    /// with a status outside the 2xx range.
    pub async fn unsubscribe(&self, channel: &str) -> Result<(), RequestError> {
        let Some(token) = self.device_token() else {
            panic!(
                "cannot unsubscribe from a channel without a device token; \
                 subscribe with one first"
            );
        };
        self.dispatch(Method::Delete, channel, &token).await
    }

    async fn dispatch(
        &self,
        method: Method,
        channel: &str,
        token: &DeviceToken,
    ) -> Result<(), RequestError> {
        let request = self.builder.build(method, channel, token);
        let result = self.transport.send(&request).await;
        let outcome = transport::outcome(result);

        match &outcome {
            Ok(()) => tracing::debug!(method = %method, url = %request.url(), "request succeeded"),
            Err(error) => {
                tracing::debug!(method = %method, url = %request.url(), %error, "request failed");
            }
        }

        outcome
    }
}
