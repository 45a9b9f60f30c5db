// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device token handling.

/// The raw device token issued by the platform push service.
///
/// Courier identifies a device by this token. On the wire it is rendered
/// as lowercase hexadecimal via [`DeviceToken::hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken(Vec<u8>);

impl DeviceToken {
    /// Creates a token from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw token bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the token, returning the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Renders the token as lowercase hexadecimal.
    ///
    /// Exactly two digits per byte, in input order, with no separators or
    /// prefix. The empty token renders as the empty string.
    #[must_use]
    pub fn hex(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

impl From<Vec<u8>> for DeviceToken {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for DeviceToken {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
