// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Courier client library.
//!
//! Configuration problems surface at client construction and are not
//! recoverable at runtime. Everything that can go wrong while talking to
//! the Courier API is reported per call as a [`RequestError`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was constructed with an invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The transport could not be initialized or failed outright.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A subscribe or unsubscribe call did not complete successfully.
    #[error("request failed: {0}")]
    Request(#[from] RequestError),
}

/// Errors in how a client was configured.
///
/// These indicate a programming error in the embedding application and
/// surface immediately from the constructor, never from an in-flight call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        /// The underlying parse failure.
        source: url::ParseError,
    },

    /// The base URL parsed but cannot have paths resolved against it
    /// (for example `data:` or `mailto:` URLs).
    #[error("base URL `{0}` cannot be used as a base")]
    OpaqueBaseUrl(String),

    /// An environment name other than `development` or `production`.
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
}

/// Outcome of a single subscribe or unsubscribe call.
///
/// Exactly one of these (or a success) is produced per dispatched request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never completed at the transport level.
    ///
    /// Always takes precedence over status-code inspection.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The Courier API answered with a status outside the 2xx range.
    ///
    /// The code is `None` when the transport could not produce a
    /// well-formed response.
    #[error("unexpected response status: {}", .0.map_or_else(|| String::from("unknown"), |code| code.to_string()))]
    UnexpectedStatus(Option<u16>),
}

/// Errors raised by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure in a non-HTTP transport implementation.
    #[error("transport failed: {0}")]
    Other(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_display_with_code() {
        let err = RequestError::UnexpectedStatus(Some(404));
        assert_eq!(err.to_string(), "unexpected response status: 404");
    }

    #[test]
    fn unexpected_status_display_without_code() {
        let err = RequestError::UnexpectedStatus(None);
        assert_eq!(err.to_string(), "unexpected response status: unknown");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::OpaqueBaseUrl("mailto:a@b.c".to_string());
        assert_eq!(err.to_string(), "base URL `mailto:a@b.c` cannot be used as a base");
    }

    #[test]
    fn error_from_request_error() {
        let err: Error = RequestError::UnexpectedStatus(Some(500)).into();
        assert!(matches!(
            err,
            Error::Request(RequestError::UnexpectedStatus(Some(500)))
        ));
    }
}
