//! Engine configuration from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Engine configuration.
///
/// Loaded from a TOML file (see [`EngineConfig::from_file`]) or from
/// environment variables (see [`EngineConfig::from_env`]); defaults apply
/// for anything unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Wall-clock budget for one seeded solve, in milliseconds. A solve
    /// exceeding it reports an inconclusive outcome, never a partial plan.
    #[serde(default = "default_solve_timeout_ms")]
    pub solve_timeout_ms: u64,
    /// Upper bound on concurrently running solves within one request.
    /// A request issues at most three.
    #[serde(default = "default_max_parallel_solves")]
    pub max_parallel_solves: usize,
}

fn default_solve_timeout_ms() -> u64 {
    5000
}

fn default_max_parallel_solves() -> usize {
    3
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            solve_timeout_ms: default_solve_timeout_ms(),
            max_parallel_solves: default_max_parallel_solves(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(String)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        let config: EngineConfig =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CRP_CONFIG` (optional): path to a TOML config file; when set, the
    ///   file is loaded first and the variables below override it
    /// - `SOLVE_TIMEOUT_MS` (optional, default: 5000): per-solve wall-clock budget
    /// - `MAX_PARALLEL_SOLVES` (optional, default: 3): solve concurrency cap
    ///
    /// # Errors
    /// Returns an error if a referenced config file is unreadable or a
    /// variable fails to parse as a positive integer.
    pub fn from_env() -> Result<Self, String> {
        let mut config = match env::var("CRP_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => EngineConfig::default(),
        };

        if let Ok(raw) = env::var("SOLVE_TIMEOUT_MS") {
            config.solve_timeout_ms = raw
                .parse()
                .map_err(|_| format!("SOLVE_TIMEOUT_MS must be an integer, got '{}'", raw))?;
        }
        if let Ok(raw) = env::var("MAX_PARALLEL_SOLVES") {
            config.max_parallel_solves = raw
                .parse()
                .map_err(|_| format!("MAX_PARALLEL_SOLVES must be an integer, got '{}'", raw))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Per-solve budget as a [`Duration`].
    pub fn solve_timeout(&self) -> Duration {
        Duration::from_millis(self.solve_timeout_ms)
    }

    fn validate(&self) -> Result<(), String> {
        if self.solve_timeout_ms == 0 {
            return Err("solve_timeout_ms must be positive".to_string());
        }
        if self.max_parallel_solves == 0 {
            return Err("max_parallel_solves must be positive".to_string());
        }
        Ok(())
    }
}
