//! Shared configuration for CLI commands

use serde::{Deserialize, Serialize};

/// Options accepted by every command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Number of `-v` flags given
    pub verbose: u8,
}

impl CommonConfig {
    /// Log filter implied by the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Install the global logger. `RUST_LOG` takes precedence over `-v`.
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_filter());
        // Keep a logger that is already installed
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(CommonConfig { verbose: 0 }.log_filter(), "warn");
        assert_eq!(CommonConfig { verbose: 1 }.log_filter(), "info");
        assert_eq!(CommonConfig { verbose: 3 }.log_filter(), "debug");
    }
}
