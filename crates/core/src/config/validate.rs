use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Scan range is non-empty and chunked sanely
/// - Fetcher has an endpoint and at least one attempt
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.scan.chunk_size == 0 {
        return Err(ConfigError::ValidationError(
            "scan.chunk_size cannot be 0".to_string(),
        ));
    }

    if config.scan.end <= config.scan.start {
        return Err(ConfigError::ValidationError(format!(
            "scan.end ({}) must be greater than scan.start ({})",
            config.scan.end, config.scan.start
        )));
    }

    if config.fetcher.attempts == 0 {
        return Err(ConfigError::ValidationError(
            "fetcher.attempts cannot be 0".to_string(),
        ));
    }

    if config.fetcher.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "fetcher.endpoint cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_chunk_size_fails() {
        let mut config = Config::default();
        config.scan.chunk_size = 0;
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_empty_range_fails() {
        let mut config = Config::default();
        config.scan.start = 100;
        config.scan.end = 100;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_inverted_range_fails() {
        let mut config = Config::default();
        config.scan.start = 200;
        config.scan.end = 100;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_attempts_fails() {
        let mut config = Config::default();
        config.fetcher.attempts = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_endpoint_fails() {
        let mut config = Config::default();
        config.fetcher.endpoint = String::new();
        assert!(validate_config(&config).is_err());
    }
}
