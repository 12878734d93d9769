use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    MissingPayload,
    ScopeUnavailable(String),
    Platform(String),
    InvalidConfig(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::MissingPayload => write!(f, "Push event carried no payload"),
            DispatchError::ScopeUnavailable(msg) => write!(f, "Service worker scope unavailable: {msg}"),
            DispatchError::Platform(msg) => write!(f, "Platform Error: {msg}"),
            DispatchError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl DispatchError {
    pub fn platform(message: impl Into<String>) -> Self {
        DispatchError::Platform(message.into())
    }

    pub fn scope_unavailable(message: impl Into<String>) -> Self {
        DispatchError::ScopeUnavailable(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        DispatchError::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DispatchError::MissingPayload.to_string(),
            "Push event carried no payload"
        );
        assert_eq!(
            DispatchError::platform("permission denied").to_string(),
            "Platform Error: permission denied"
        );
        assert_eq!(
            DispatchError::invalid_config("title cannot be empty").to_string(),
            "Invalid configuration: title cannot be empty"
        );
    }
}
