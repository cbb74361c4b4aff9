//! Digest prefix matching.
//!
//! The search only ever tests one predicate: does the lowercase-hex digest
//! of a candidate document start with the requested vanity prefix.

mod prefix;

pub use prefix::{PrefixError, VanityPrefix};
