//! # chainid_vanity
//!
//! Parallel vanity chain ID generator for genesis files.
//!
//! Repeatedly substitutes a random seed into the `initial_chain_id` field
//! of a genesis JSON document and hashes the result until the SHA-256
//! digest starts with the requested prefix.
//!
//! ## Architecture
//!
//! - `seed`: Alphabets and random seed generation
//! - `template`: Genesis document compilation and seed substitution
//! - `digest`: Candidate document hashing
//! - `matcher`: Digest prefix validation and matching
//! - `worker`: Parallel execution and worker pool management
//! - `config`: Runtime configuration

pub mod config;
pub mod digest;
pub mod matcher;
pub mod seed;
pub mod template;
pub mod worker;

pub use config::Config;
pub use matcher::VanityPrefix;
pub use seed::Alphabet;
pub use template::{GenesisTemplate, TemplateError};
pub use worker::{ChainIdResult, SearchJob, SearchOutcome, WorkerPool};
