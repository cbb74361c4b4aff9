//! Vanity prefix validation and matching.

use std::fmt;

/// Hex width of a SHA-256 digest; no prefix can be longer than the digest.
const DIGEST_HEX_LEN: usize = 64;

/// A validated, lower-cased digest prefix.
///
/// Construction guarantees the prefix is non-empty, at most a full digest
/// wide, and composed only of characters that can appear in a lowercase hex
/// digest, so matching is a plain `starts_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityPrefix {
    prefix: String,
}

impl VanityPrefix {
    /// Validates and normalizes a user-supplied prefix.
    ///
    /// Uppercase hex input is accepted and lower-cased; digests are always
    /// compared in lowercase.
    pub fn new(prefix: &str) -> Result<Self, PrefixError> {
        let prefix = prefix.to_lowercase();

        if prefix.is_empty() {
            return Err(PrefixError::Empty);
        }
        if prefix.len() > DIGEST_HEX_LEN {
            return Err(PrefixError::TooLong(prefix.len()));
        }
        if let Some(c) = prefix.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(PrefixError::InvalidCharacter(c));
        }

        Ok(Self { prefix })
    }

    /// Returns the normalized prefix string.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Returns the prefix length in characters.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// A constructed prefix is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tests a lowercase-hex digest against this prefix.
    #[inline]
    pub fn matches(&self, digest_hex: &str) -> bool {
        digest_hex.starts_with(&self.prefix)
    }

    /// Returns the expected number of attempts to find a match.
    ///
    /// Each digest character is one of 16 values, so the expectation is
    /// 16^n for a prefix of length n.
    pub fn estimated_attempts(&self) -> u64 {
        16u64.saturating_pow(self.prefix.len() as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        match self.estimated_attempts() {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

impl fmt::Display for VanityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixError {
    #[error("prefix cannot be empty")]
    Empty,
    #[error("prefix contains '{0}', which cannot appear in a hex digest")]
    InvalidCharacter(char),
    #[error("prefix is {0} characters, longer than a full digest (64)")]
    TooLong(usize),
}
