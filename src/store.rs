// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device token persistence.
//!
//! The client persists the last-used device token through a narrow
//! key-value capability, so embedding applications can back it with a
//! platform preference store and tests can substitute an in-memory one.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Key-value capability used to persist the device token.
///
/// Concurrent writers race with whatever atomicity the implementation
/// offers per key; last write wins. No further locking is layered on top.
pub trait TokenStore {
    /// Returns the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `value` under `key`. Passing `None` removes the entry.
    fn set(&self, key: &str, value: Option<&[u8]>);
}

/// In-memory [`TokenStore`].
///
/// Cloning shares the underlying map, so several clients can observe one
/// persisted token. State lives for the lifetime of the process; back the
/// client with a custom store for persistence across restarts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Option<&[u8]>) {
        let mut entries = self.entries.write();
        match value {
            Some(bytes) => {
                entries.insert(key.to_string(), bytes.to_vec());
            }
            None => {
                entries.remove(key);
            }
        }
    }
}
