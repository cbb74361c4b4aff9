//! Candidate seed generation.
//!
//! A seed is the vanity prefix followed by characters drawn uniformly at
//! random from a fixed alphabet, padded to a fixed total length. Every
//! attempt samples a fresh seed with replacement; no de-duplication.

mod alphabet;
mod generator;

pub use alphabet::Alphabet;
pub use generator::generate_seed;
