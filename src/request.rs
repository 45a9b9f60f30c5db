// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request construction for the Courier wire contract.
//!
//! Both operations hit the same endpoint shape,
//! `subscribe/<slug>?environment=<env>`, differing only in method:
//! `PUT` subscribes a device token to a channel, `DELETE` removes it.

use std::fmt;

use crate::config::Config;
use crate::environment::Environment;
use crate::error::ConfigError;
use crate::slug::slugify;
use crate::token::DeviceToken;

/// HTTP method of a Courier request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Subscribe a device token to a channel.
    Put,
    /// Unsubscribe a device token from a channel.
    Delete,
}

impl Method {
    /// Returns the HTTP method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled request, ready for a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

impl Request {
    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns all headers as name/value pairs.
    #[must_use]
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Returns the value of the named header, if set.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the request body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Builds subscribe and unsubscribe requests from a validated configuration.
///
/// Construction is the only fallible step (malformed base URL); once built,
/// assembling a request for any channel and token is total.
#[derive(Debug, Clone)]
pub(crate) struct RequestBuilder {
    base_url: String,
    api_token: String,
    environment: Environment,
}

impl RequestBuilder {
    pub(crate) fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: config.validated_base()?,
            api_token: config.api_token().to_string(),
            environment: config.environment(),
        })
    }

    /// Returns the endpoint URL for a channel.
    pub(crate) fn channel_url(&self, channel: &str) -> String {
        format!(
            "{}subscribe/{}?environment={}",
            self.base_url,
            slugify(channel),
            self.environment
        )
    }

    /// Assembles a request carrying the token body and auth headers.
    pub(crate) fn build(&self, method: Method, channel: &str, token: &DeviceToken) -> Request {
        Request {
            method,
            url: self.channel_url(channel),
            headers: vec![
                ("Authorization", format!("Token token={}", self.api_token)),
                ("Content-Type", String::from("application/json")),
                (
                    "Accept",
                    format!("application/json version={}", Config::API_VERSION),
                ),
            ],
            body: token_body(token),
        }
    }
}

/// Serializes the `{"device":{"token":"<hex>"}}` request body.
fn token_body(token: &DeviceToken) -> Vec<u8> {
    serde_json::json!({ "device": { "token": token.hex() } })
        .to_string()
        .into_bytes()
}
