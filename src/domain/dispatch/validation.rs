use super::error::DispatchError;
use super::types::DispatcherConfig;

fn validate_not_empty(value: &str, error_msg: &str) -> Result<(), DispatchError> {
    if value.trim().is_empty() {
        return Err(DispatchError::invalid_config(error_msg));
    }
    Ok(())
}

pub fn validate_open_url(url: &str) -> Result<(), DispatchError> {
    validate_not_empty(url, "Open URL cannot be empty or whitespace only")?;
    if url.chars().any(char::is_whitespace) {
        return Err(DispatchError::invalid_config(
            "Open URL cannot contain whitespace",
        ));
    }
    Ok(())
}

pub fn validate_config(config: &DispatcherConfig) -> Result<(), DispatchError> {
    validate_not_empty(&config.title, "Title cannot be empty or whitespace only")?;
    validate_open_url(&config.open_url)?;
    validate_not_empty(&config.icons.default, "Default icon path cannot be empty")?;
    validate_not_empty(&config.icons.success, "Success icon path cannot be empty")?;
    validate_not_empty(&config.icons.failure, "Failure icon path cannot be empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&DispatcherConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let config = DispatcherConfig {
            title: "  ".to_string(),
            ..DispatcherConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(DispatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_open_url() {
        assert!(validate_open_url("http://localhost:7010").is_ok());
        assert!(validate_open_url("/dashboard").is_ok());
        assert!(validate_open_url("").is_err());
        assert!(validate_open_url("\t").is_err());
        assert!(validate_open_url("http://local host").is_err());
    }

    #[test]
    fn test_validate_empty_icon_path() {
        let mut config = DispatcherConfig::default();
        config.icons.failure = String::new();
        assert!(validate_config(&config).is_err());
    }
}
