// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Courier client library.
//!
//! This library registers a device's push token with the Courier
//! notification broker by subscribing it to named channels, and
//! unsubscribes it again. Channel names may be arbitrary Unicode; they are
//! normalized into URL-safe slugs before hitting the wire.
//!
//! # Quick Start
//!
//! ```no_run
//! use courier_lib::{Client, Config, DeviceToken, Environment};
//!
//! #[tokio::main]
//! async fn main() -> courier_lib::Result<()> {
//!     let client = Client::new(Config::new("api_key", Environment::Development))?;
//!
//!     // The raw token handed out by the platform push service.
//!     let token = DeviceToken::new(vec![0x93, 0xb4, 0x0f, 0xbc]);
//!
//!     client.subscribe_with_token("breaking-news", &token).await?;
//!
//!     // The token is persisted, so later calls can omit it.
//!     client.unsubscribe("breaking-news").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Collaborators
//!
//! Two capabilities are injected and can be replaced, for tests or for
//! platform integration:
//!
//! - [`Transport`]: submits an assembled [`Request`] and resolves with the
//!   raw result. Defaults to [`HttpTransport`] over `reqwest`.
//! - [`TokenStore`]: persists the last-used device token by key. Defaults
//!   to the process-local [`MemoryStore`]; back it with a platform
//!   preference store to survive restarts.
//!
//! # Outcomes
//!
//! Every subscribe or unsubscribe call issues exactly one HTTP request and
//! resolves with exactly one outcome: `Ok(())` for any 2xx response,
//! [`RequestError::UnexpectedStatus`] otherwise, and
//! [`RequestError::Transport`] when the request never completed. The
//! library adds no retries, timeouts, or cancellation of its own.

mod client;
mod config;
mod environment;
pub mod error;
mod request;
pub mod slug;
mod store;
mod token;
pub mod transport;

pub use client::Client;
pub use config::Config;
pub use environment::Environment;
pub use error::{ConfigError, Error, RequestError, Result, TransportError};
pub use request::{Method, Request};
pub use slug::slugify;
pub use store::{MemoryStore, TokenStore};
pub use token::DeviceToken;
pub use transport::{HttpTransport, Transport, TransportResponse};
