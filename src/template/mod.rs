//! Genesis document templating.
//!
//! Compiles a genesis JSON file into a template split around the single
//! `initial_chain_id` field, so each search attempt can splice in a fresh
//! seed without re-scanning the document.

mod genesis;

pub use genesis::{GenesisTemplate, TemplateError, CHAIN_ID_FIELD};
