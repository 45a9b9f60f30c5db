// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.

use url::Url;

use crate::environment::Environment;
use crate::error::ConfigError;

/// Immutable configuration for a [`Client`](crate::Client).
///
/// Created once per client and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use courier_lib::{Config, Environment};
///
/// let config = Config::new("api_key", Environment::Production);
///
/// // Pointing at a non-default deployment:
/// let config = Config::new("api_key", Environment::Development)
///     .with_base_url("https://courier.example.com/");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    api_token: String,
    environment: Environment,
    base_url: String,
}

impl Config {
    /// The production service root used when no base URL is given.
    pub const DEFAULT_BASE_URL: &'static str = "https://courier.thoughtbot.com/";
    /// Version of the Courier HTTP API spoken by this library.
    pub const API_VERSION: u32 = 1;

    /// Creates a configuration for the given API token and environment.
    pub fn new(api_token: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_token: api_token.into(),
            environment,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the default base URL.
    ///
    /// The URL is validated when the client is constructed, not here.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the API token.
    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Returns the environment.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the configured base URL, as given.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates the base URL and returns it normalized with a trailing
    /// slash, so request paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL does not parse or cannot
    /// have paths resolved against it.
    pub(crate) fn validated_base(&self) -> Result<String, ConfigError> {
        let parsed = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::OpaqueBaseUrl(self.base_url.clone()));
        }

        let mut base = parsed.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(base)
    }

    /// Storage key for the persisted device token.
    ///
    /// Scoped per API token, so clients configured for different Courier
    /// apps sharing one store keep separate tokens.
    pub(crate) fn device_token_key(&self) -> String {
        format!("courier.{}.device_token", self.api_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_service_root() {
        let config = Config::new("api_key", Environment::Development);
        assert_eq!(config.base_url(), "https://courier.thoughtbot.com/");
    }

    #[test]
    fn validated_base_appends_trailing_slash() {
        let config =
            Config::new("api_key", Environment::Production).with_base_url("https://example.com");
        assert_eq!(config.validated_base().unwrap(), "https://example.com/");
    }

    #[test]
    fn validated_base_keeps_existing_path() {
        let config = Config::new("api_key", Environment::Production)
            .with_base_url("https://example.com/push/v2");
        assert_eq!(
            config.validated_base().unwrap(),
            "https://example.com/push/v2/"
        );
    }

    #[test]
    fn malformed_base_url_is_a_config_error() {
        let config =
            Config::new("api_key", Environment::Production).with_base_url("not a url at all");
        assert!(matches!(
            config.validated_base(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn opaque_base_url_is_rejected() {
        let config =
            Config::new("api_key", Environment::Production).with_base_url("mailto:a@example.com");
        assert!(matches!(
            config.validated_base(),
            Err(ConfigError::OpaqueBaseUrl(_))
        ));
    }

    #[test]
    fn token_key_is_scoped_per_api_token() {
        let a = Config::new("app_a", Environment::Production);
        let b = Config::new("app_b", Environment::Production);
        assert_eq!(a.device_token_key(), "courier.app_a.device_token");
        assert_ne!(a.device_token_key(), b.device_token_key());
    }
}
