//! Runtime configuration for the vanity chain ID generator.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::matcher::{PrefixError, VanityPrefix};
use crate::seed::Alphabet;

/// Vanity Chain ID Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the genesis JSON template
    pub genesis: PathBuf,

    /// Desired digest prefix (hex characters only: 0-9, a-f)
    pub prefix: String,

    /// Seed alphabet: alnum or hex
    #[arg(short, long, default_value = "alnum")]
    pub alphabet: Alphabet,

    /// Seed length in characters (default: 90 for alnum, 64 for hex)
    #[arg(short = 'l', long)]
    pub seed_length: Option<usize>,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,

    /// Give up after this many attempts (0 = search until found)
    #[arg(long, default_value = "0")]
    pub max_attempts: u64,

    /// Output path for the winning document (default: <genesis>.vanity)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration and returns the normalized prefix.
    pub fn validate(&self) -> Result<VanityPrefix, ConfigError> {
        let prefix = VanityPrefix::new(&self.prefix)?;

        let seed_length = self.effective_seed_length();
        if prefix.len() > seed_length {
            return Err(ConfigError::PrefixLongerThanSeed {
                prefix: prefix.len(),
                seed_length,
            });
        }

        if self.workers == Some(0) {
            return Err(ConfigError::NoWorkers);
        }

        Ok(prefix)
    }

    /// Returns the number of workers, defaulting to CPU count.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Returns the seed length, defaulting per alphabet.
    pub fn effective_seed_length(&self) -> usize {
        self.seed_length
            .unwrap_or_else(|| self.alphabet.default_seed_length())
    }

    /// Returns the attempt cap, `None` meaning search until found.
    pub fn attempt_cap(&self) -> Option<u64> {
        match self.max_attempts {
            0 => None,
            n => Some(n),
        }
    }

    /// Returns the output path, defaulting to the input path + ".vanity",
    /// matching the convention downstream tooling expects.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => vanity_path(&self.genesis),
        }
    }
}

fn vanity_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".vanity");
    PathBuf::from(path)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid prefix: {0}")]
    InvalidPrefix(#[from] PrefixError),
    #[error("Prefix is {prefix} characters but the seed is only {seed_length}")]
    PrefixLongerThanSeed { prefix: usize, seed_length: usize },
    #[error("Worker count must be at least 1")]
    NoWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config(prefix: &str) -> Config {
        Config {
            genesis: PathBuf::from("genesis.json"),
            prefix: prefix.into(),
            alphabet: Alphabet::Alphanumeric,
            seed_length: None,
            workers: None,
            report_interval: 5,
            max_attempts: 0,
            output: None,
        }
    }

    #[test]
    fn test_valid_prefix() {
        let config = make_test_config("dead");
        assert_eq!(config.validate().unwrap().as_str(), "dead");
    }

    #[test]
    fn test_invalid_prefix() {
        let config = make_test_config("xyz");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_prefix_longer_than_seed() {
        let mut config = make_test_config("abcdef");
        config.seed_length = Some(4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PrefixLongerThanSeed { .. })
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = make_test_config("ab");
        config.workers = Some(0);
        assert!(matches!(config.validate(), Err(ConfigError::NoWorkers)));
    }

    #[test]
    fn test_seed_length_defaults_per_alphabet() {
        let mut config = make_test_config("ab");
        assert_eq!(config.effective_seed_length(), 90);
        config.alphabet = Alphabet::Hex;
        assert_eq!(config.effective_seed_length(), 64);
        config.seed_length = Some(32);
        assert_eq!(config.effective_seed_length(), 32);
    }

    #[test]
    fn test_default_output_path() {
        let config = make_test_config("ab");
        assert_eq!(config.output_path(), PathBuf::from("genesis.json.vanity"));
    }

    #[test]
    fn test_attempt_cap() {
        let mut config = make_test_config("ab");
        assert_eq!(config.attempt_cap(), None);
        config.max_attempts = 500;
        assert_eq!(config.attempt_cap(), Some(500));
    }
}
