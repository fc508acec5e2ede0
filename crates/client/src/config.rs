//! Console client configuration.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Diagnostics-only settings read from the environment.
///
/// The battle rules themselves are fixed; these only affect reproducibility
/// and where logs go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Fixed RNG seed. When unset, a time-based seed is used.
    pub seed: Option<u64>,
    /// Log directory override. When unset, the platform cache dir is used.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - RNG seed (u64)
    /// - `ARENA_LOG_DIR` - directory for `arena.log`
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("ARENA_SEED"),
            log_dir: read_env::<PathBuf>("ARENA_LOG_DIR"),
        }
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
