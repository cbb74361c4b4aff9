//! Search worker running the generate/build/hash/test loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::digest::sha256_hex;
use crate::seed::generate_seed;

use super::pool::{ChainIdResult, SearchJob};

/// Shared statistics across all workers.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total candidate documents hashed
    pub attempts: AtomicU64,
    /// Matching digests found
    pub matches_found: AtomicU64,
}

impl WorkerStats {
    /// Creates new worker stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total attempts across all workers.
    pub fn total_attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Returns the total matches found.
    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }
}

/// A worker that generates seeds and tests candidate documents.
pub struct SearchWorker {
    /// Worker ID
    id: usize,
    /// The search parameters, shared by every worker
    job: SearchJob,
    /// Channel to send the winning result
    result_tx: Sender<ChainIdResult>,
    /// Shared stop flag; claimed by compare-and-set on success
    stop_flag: Arc<AtomicBool>,
    /// Shared statistics
    stats: Arc<WorkerStats>,
}

impl SearchWorker {
    /// Creates a new search worker.
    pub fn new(
        id: usize,
        job: SearchJob,
        result_tx: Sender<ChainIdResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            job,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the worker loop.
    ///
    /// Each iteration samples a fresh seed, splices it into the template,
    /// hashes the result, and tests the digest prefix, until:
    /// - this worker finds a match and claims the win
    /// - another worker (or a signal handler) sets the stop flag
    /// - the shared attempt cap, if any, is exhausted
    ///
    /// Attempts are counted in batches to keep atomic traffic off the hot
    /// loop; workers therefore observe a win within one batch.
    pub fn run(&self) {
        const BATCH_SIZE: u64 = 128;

        // Independent statistical-quality generator per worker, seeded from
        // OS entropy so workers do not duplicate each other's seed streams.
        let mut rng = SmallRng::from_entropy();

        loop {
            if self.stop_flag.load(Ordering::Relaxed) {
                break;
            }
            if let Some(cap) = self.job.max_attempts {
                if self.stats.total_attempts() >= cap {
                    break;
                }
            }

            let mut batch_attempts = 0u64;
            for _ in 0..BATCH_SIZE {
                batch_attempts += 1;

                let seed = generate_seed(
                    self.job.alphabet,
                    self.job.prefix.as_str(),
                    self.job.seed_length,
                    &mut rng,
                );
                let document = self.job.template.build(&seed);
                let digest = sha256_hex(&document);

                if self.job.prefix.matches(&digest) {
                    self.stats.attempts.fetch_add(batch_attempts, Ordering::Relaxed);
                    self.stats.matches_found.fetch_add(1, Ordering::Relaxed);

                    // First success wins: only the worker that flips the
                    // flag may send, so at most one result is ever emitted.
                    let claimed = self
                        .stop_flag
                        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Relaxed)
                        .is_ok();
                    if claimed {
                        let _ = self.result_tx.send(ChainIdResult {
                            chain_id: seed,
                            document,
                            digest,
                            worker_id: self.id,
                            attempts: self.stats.total_attempts(),
                        });
                    }
                    return;
                }
            }

            self.stats.attempts.fetch_add(batch_attempts, Ordering::Relaxed);
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
