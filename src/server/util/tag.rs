//! Player and clan tag normalization.
//!
//! Every tag that is used as a map key or compared against another tag must go through
//! [`PlayerTag::normalize`] first. Stored records, alias links, and roster snapshots are
//! written by different tools over time and disagree on casing, the leading `#` marker, and
//! stray whitespace; the normalized form is the only reliable join key between them.

use std::fmt;

use serde::{Serialize, Serializer};

/// Marker character prefixed to every canonical tag.
pub const TAG_MARKER: char = '#';

/// Characters the game uses when issuing player and clan tags.
const CLASH_TAG_ALPHABET: &str = "0289PYLQGRJCUV";

/// Substring identifying test accounts which must never appear in the player database.
const TEST_TAG_MARKER: &str = "TEST";

/// A canonical player or clan tag: uppercase, a single leading `#`, no whitespace.
///
/// Two tags refer to the same account if and only if their normalized forms are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerTag(String);

impl PlayerTag {
    /// Normalizes a raw tag string into its canonical form.
    ///
    /// Trims and removes all whitespace, strips every leading `#`, uppercases the remainder,
    /// and prefixes a single `#`. Normalization is idempotent.
    ///
    /// # Arguments
    /// - `raw` - Tag as entered by a user or stored by another tool
    ///
    /// # Returns
    /// - `Some(PlayerTag)` - The canonical tag
    /// - `None` - Input is empty after cleanup or contains non-alphanumeric characters
    ///
    /// # Example
    /// ```ignore
    /// let tag = PlayerTag::normalize("  ##2pr8 r8v8p ").unwrap();
    /// assert_eq!(tag.as_str(), "#2PR8R8V8P");
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let body = compact.trim_start_matches(TAG_MARKER).to_uppercase();

        if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        Some(Self(format!("{}{}", TAG_MARKER, body)))
    }

    /// The canonical tag including its `#` marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag without its `#` marker, as expected by the game-data API.
    pub fn bare(&self) -> &str {
        &self.0[TAG_MARKER.len_utf8()..]
    }

    /// Whether this tag belongs to a test account.
    pub fn is_test_tag(&self) -> bool {
        is_test_tag(&self.0)
    }

    /// Whether this tag could have been issued by the game.
    pub fn is_valid_clash_tag(&self) -> bool {
        is_valid_clash_tag(self.bare())
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PlayerTag> for String {
    fn from(tag: PlayerTag) -> Self {
        tag.0
    }
}

impl Serialize for PlayerTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Case-insensitive check for the reserved test account marker.
pub fn is_test_tag(tag: &str) -> bool {
    tag.to_uppercase().contains(TEST_TAG_MARKER)
}

/// Validates a tag body (without `#`) against the game's tag alphabet and length.
///
/// # Example
/// ```ignore
/// assert!(is_valid_clash_tag("2PR8R8V8P"));
/// assert!(!is_valid_clash_tag("INVALID123"));
/// ```
pub fn is_valid_clash_tag(bare: &str) -> bool {
    (3..=15).contains(&bare.len()) && bare.chars().all(|c| CLASH_TAG_ALPHABET.contains(c))
}
