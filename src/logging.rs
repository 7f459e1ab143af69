//! Log subscriber setup.
//!
//! The library only emits `tracing` events. Binaries call [`init`] once with
//! the filter from their [`Config`](crate::config::Config), which already
//! folds in `SEEDPHRASE_LOG`.

use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

/// Install a global fmt subscriber writing to stderr.
///
/// # Errors
/// Returns error if the filter is invalid or a subscriber is already set
pub fn init(filter: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| ConfigError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let err = init("seedphrase=loud").unwrap_err();
        assert!(matches!(err, ConfigError::Logging(_)));
    }
}
