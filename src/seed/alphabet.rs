//! Seed alphabets.

use std::fmt;
use std::str::FromStr;

const ALNUM_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// The character set candidate seeds are drawn from.
///
/// Selected once per run and fixed for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Case-sensitive alphanumeric (`[a-zA-Z0-9]`, 62 characters)
    #[default]
    Alphanumeric,
    /// Lowercase hexadecimal (`[0-9a-f]`, 16 characters)
    Hex,
}

impl Alphabet {
    /// Returns the ordered character set.
    #[inline]
    pub const fn chars(self) -> &'static [u8] {
        match self {
            Alphabet::Alphanumeric => ALNUM_CHARS,
            Alphabet::Hex => HEX_CHARS,
        }
    }

    /// Returns the number of characters in the alphabet.
    #[inline]
    pub const fn len(self) -> usize {
        self.chars().len()
    }

    /// An alphabet is never empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns the conventional seed length for this alphabet.
    ///
    /// 90 characters for the alphanumeric variant, 64 (a full hex digest
    /// width) for the hexadecimal variant.
    pub const fn default_seed_length(self) -> usize {
        match self {
            Alphabet::Alphanumeric => 90,
            Alphabet::Hex => 64,
        }
    }
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alnum" | "alphanumeric" => Ok(Alphabet::Alphanumeric),
            "hex" | "hexadecimal" => Ok(Alphabet::Hex),
            _ => Err(format!("Unknown alphabet: {}", s)),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Alphanumeric => write!(f, "alphanumeric"),
            Alphabet::Hex => write!(f, "hex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Alphanumeric.len(), 62);
        assert_eq!(Alphabet::Hex.len(), 16);
    }

    #[test]
    fn test_default_seed_lengths() {
        assert_eq!(Alphabet::Alphanumeric.default_seed_length(), 90);
        assert_eq!(Alphabet::Hex.default_seed_length(), 64);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("alnum".parse::<Alphabet>().unwrap(), Alphabet::Alphanumeric);
        assert_eq!("HEX".parse::<Alphabet>().unwrap(), Alphabet::Hex);
        assert!("base64".parse::<Alphabet>().is_err());
    }

    #[test]
    fn test_hex_chars_are_digest_chars() {
        assert!(Alphabet::Hex
            .chars()
            .iter()
            .all(|&c| (c as char).is_ascii_hexdigit()));
    }
}
