/// Platform - Dependency injection container shared by the dispatcher operations.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Configuration: `Arc` snapshot taken when the platform is built
use std::sync::Arc;

use crate::domain::dispatch::DispatcherConfig;
use crate::ports::LoggerPort;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    config: Arc<DispatcherConfig>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target and
    /// the currently active configuration.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            config: crate::adapters::current_config(),
        }
    }

    /// Creates a Platform bound to an explicit configuration instead of the
    /// process-wide one.
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            logger: crate::adapters::logger(),
            config: Arc::new(config),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_creation() {
        let platform = Platform::new();
        platform.logger().log("test");
    }

    #[test]
    fn test_platform_clone_shares_config() {
        let platform = Platform::with_config(DispatcherConfig {
            title: "CloudDB QA".to_string(),
            ..DispatcherConfig::default()
        });
        let cloned = platform.clone();
        assert_eq!(cloned.config().title, "CloudDB QA");
    }

    #[test]
    fn test_platform_with_config_ignores_global() {
        let config = DispatcherConfig {
            open_url: "http://127.0.0.1:9000".to_string(),
            ..DispatcherConfig::default()
        };
        let platform = Platform::with_config(config.clone());
        assert_eq!(platform.config(), &config);
    }

    #[test]
    fn test_platform_logger_access() {
        let platform = Platform::default();
        let logger = platform.logger();
        logger.log("test 1");
        logger.warn("test 2");
        logger.error("test 3");
    }
}
