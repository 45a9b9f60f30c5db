// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel name normalization.
//!
//! Courier channels are addressed by URL-safe slugs. Callers may pass any
//! Unicode string as a channel name; [`slugify`] reduces it to lowercase
//! ASCII words joined by single hyphens.

use deunicode::deunicode;

/// Normalizes an arbitrary channel name into a URL-safe slug.
///
/// The name is transliterated to ASCII with diacritics stripped,
/// lowercased, and every run of characters outside `[a-z0-9-_]`
/// (whitespace included) becomes a single `-`. The result carries no
/// leading, trailing, or repeated hyphens.
///
/// Total for any input and idempotent on strings that are already slugs.
///
/// # Examples
///
/// ```
/// use courier_lib::slug::slugify;
///
/// assert_eq!(slugify("Tést\n chännél"), "test-channel");
/// assert_eq!(slugify("!Tést/chännél! !test!"), "test-channel-test");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for ch in ascii.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            // Covers '-' itself, so mixed separator runs still collapse.
            pending_separator = true;
        }
    }

    slug
}
