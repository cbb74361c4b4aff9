//! Worker pool for the parallel chain ID search.
//!
//! This module provides:
//! - Multi-threaded search workers running the generate/build/hash/test loop
//! - A coordinating pool with first-success semantics
//! - Attempt tracking and progress reporting

mod cpu;
mod pool;

pub use cpu::{SearchWorker, WorkerStats};
pub use pool::{ChainIdResult, SearchJob, SearchOutcome, WorkerPool};
