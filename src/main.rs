//! Vanity Chain ID Generator CLI
//!
//! Usage:
//!   chainid_vanity genesis.json cafe             # digest starts with "cafe"
//!   chainid_vanity genesis.json ab -a hex        # hex chain id, 64 chars
//!   chainid_vanity genesis.json dead -w 8        # 8 worker threads
//!
//! Writes the winning document to genesis.json.vanity.

use std::fs;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use chainid_vanity::{ChainIdResult, Config, GenesisTemplate, SearchJob, SearchOutcome, WorkerPool};

fn main() {
    let config = Config::parse();

    // Validate configuration
    let prefix = match config.validate() {
        Ok(prefix) => prefix,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Read and compile the genesis template
    let original = match fs::read(&config.genesis) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read {}: {}", config.genesis.display(), e);
            process::exit(1);
        }
    };
    let template = match GenesisTemplate::compile(&original) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("Template error: {}", e);
            process::exit(1);
        }
    };

    let output_path = config.output_path();

    // Print startup info
    println!("Vanity Chain ID Generator");
    println!("=========================");
    println!("Genesis:     {}", config.genesis.display());
    println!("Prefix:      {}", prefix);
    println!("Difficulty:  {}", prefix.difficulty_description());
    println!("Alphabet:    {}", config.alphabet);
    println!("Seed length: {}", config.effective_seed_length());
    println!("Workers:     {}", config.worker_count());
    println!("Output:      {}", output_path.display());
    println!();

    // Create worker pool
    let job = SearchJob {
        template: Arc::new(template),
        prefix,
        alphabet: config.alphabet,
        seed_length: config.effective_seed_length(),
        max_attempts: config.attempt_cap(),
    };
    let pool = WorkerPool::new(config.worker_count(), job);

    // Set up ctrl-c handler
    let interrupted = Arc::new(AtomicBool::new(false));
    ctrlc_handler(interrupted.clone(), pool.stop_flag_clone());

    println!("Searching... (Press Ctrl+C to stop)\n");

    let report_interval = Duration::from_secs(config.report_interval);

    loop {
        match pool.wait_for_result(report_interval) {
            SearchOutcome::Found(result) => {
                // Single commit point: only the coordinator writes, and only
                // the one claimed result ever reaches it.
                if let Err(e) = fs::write(&output_path, &result.document) {
                    eprintln!("Failed to write {}: {}", output_path.display(), e);
                    process::exit(1);
                }
                print_result(&result, &output_path);
                print_stats(&pool);
                pool.join();
                return;
            }
            SearchOutcome::Pending => {
                if !interrupted.load(Ordering::Relaxed) {
                    print_progress(&pool);
                }
            }
            SearchOutcome::Exhausted => {
                if interrupted.load(Ordering::Relaxed) {
                    println!("\nStopped by user.");
                    print_stats(&pool);
                    pool.join();
                    process::exit(130);
                }
                eprintln!(
                    "No match within {} attempts.",
                    config.max_attempts
                );
                print_stats(&pool);
                pool.join();
                process::exit(1);
            }
        }
    }
}

fn print_result(result: &ChainIdResult, output_path: &std::path::Path) {
    println!("=== Match found ===");
    println!("Chain ID: {}", result.chain_id);
    println!("Digest:   {}", result.digest);
    println!("Worker:   {}", result.worker_id);
    println!("Written:  {}", output_path.display());
    println!();
}

fn print_progress(pool: &WorkerPool) {
    println!(
        "[{:>4}s] Hashed {} candidates ({}/s)",
        pool.elapsed().as_secs(),
        format_number(pool.total_attempts()),
        format_number(pool.attempts_per_second() as u64)
    );
}

fn print_stats(pool: &WorkerPool) {
    println!("--- Final Statistics ---");
    println!("Total attempts: {}", format_number(pool.total_attempts()));
    println!("Time elapsed:   {:.2}s", pool.elapsed().as_secs_f64());
    println!(
        "Average speed:  {}/s",
        format_number(pool.attempts_per_second() as u64)
    );
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn ctrlc_handler(interrupted: Arc<AtomicBool>, stop_flag: Arc<AtomicBool>) {
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::Relaxed);
        stop_flag.store(true, Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");
}
