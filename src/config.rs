// Configuration module for tsel
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Default test-path prefix (TSEL_TEST_PREFIX)
    pub test_prefix: String,

    /// Default git diff base ref (TSEL_GIT_BASE)
    pub git_base: String,

    /// Cap on identifiers echoed in JSON report lists (TSEL_MAX_REPORT)
    pub max_report: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_prefix: "tests/".to_string(),
            git_base: "HEAD".to_string(),
            max_report: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("TSEL_TEST_PREFIX") {
            if !val.is_empty() {
                config.test_prefix = val;
            }
        }

        if let Ok(val) = env::var("TSEL_GIT_BASE") {
            if !val.is_empty() {
                config.git_base = val;
            }
        }

        if let Ok(val) = env::var("TSEL_MAX_REPORT") {
            if let Ok(parsed) = val.parse() {
                config.max_report = parsed;
            } else {
                eprintln!(
                    "tsel: Warning: Invalid TSEL_MAX_REPORT value: {}, using default: {}",
                    val, config.max_report
                );
            }
        }

        config
    }

    /// Get the global configuration instance
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}
