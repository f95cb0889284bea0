use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::logger::Logger;

/// An explicit mapping from name to [`Logger`].
///
/// Replaces the ambient named-logger lookup found in typical logging
/// facilities: applications construct a registry, share it (via `Arc` if
/// needed) and hold [`Arc<Logger>`] references obtained from it. Registering
/// a configuration under a name that is already present **replaces** the
/// existing logger wholesale, so repeated setup never accumulates duplicate
/// sinks.
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a logger from `config` and stores it under its name,
    /// replacing any logger previously registered under that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the logger's file sink cannot be constructed; the
    /// previously registered logger (if any) is left in place in that case.
    pub fn register(&self, config: LoggerConfig) -> Result<Arc<Logger>> {
        let logger = Arc::new(Logger::new(config)?);
        self.loggers
            .write()
            .insert(logger.name().to_string(), Arc::clone(&logger));
        Ok(logger)
    }

    /// Returns the logger registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    /// Returns the names of all registered loggers.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.loggers.read().keys().cloned().collect()
    }

    /// Returns the number of registered loggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    /// Returns `true` if no loggers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Drops all registered loggers, releasing their file handles (unless
    /// callers still hold references).
    pub fn reset(&self) {
        self.loggers.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::severity::Severity;

    use tempfile::tempdir;

    fn console_config(name: &str) -> LoggerConfig {
        LoggerConfig {
            name: name.to_string(),
            console_output: true,
            file_output: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_register_and_get() {
        let registry = LoggerRegistry::new();

        let logger = registry.register(console_config("pump")).unwrap();
        assert_eq!(logger.name(), "pump");

        let fetched = registry.get("pump").unwrap();
        assert!(Arc::ptr_eq(&logger, &fetched));
        assert!(registry.get("valve").is_none());
    }

    #[test]
    fn test_reregistering_replaces_sinks() {
        let dir = tempdir().unwrap();
        let registry = LoggerRegistry::new();

        registry
            .register(LoggerConfig {
                name: "pump".to_string(),
                log_file: Some(dir.path().join("pump.log")),
                console_output: true,
                file_output: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(registry.get("pump").unwrap().sink_count(), 2);

        // Second registration under the same name: only the new config's
        // single sink remains, nothing accumulates.
        let replaced = registry
            .register(LoggerConfig {
                threshold: Severity::Error,
                ..console_config("pump")
            })
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(replaced.sink_count(), 1);
        assert_eq!(registry.get("pump").unwrap().threshold(), Severity::Error);
    }

    #[test]
    fn test_failed_registration_keeps_previous_logger() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let registry = LoggerRegistry::new();
        let original = registry.register(console_config("pump")).unwrap();

        let result = registry.register(LoggerConfig {
            name: "pump".to_string(),
            log_file: Some(blocker.join("sub/pump.log")),
            console_output: false,
            file_output: true,
            ..Default::default()
        });

        assert!(result.is_err());
        assert!(Arc::ptr_eq(&original, &registry.get("pump").unwrap()));
    }

    #[test]
    fn test_reset_empties_registry() {
        let registry = LoggerRegistry::new();
        registry.register(console_config("pump")).unwrap();
        registry.register(console_config("valve")).unwrap();
        assert_eq!(registry.len(), 2);

        registry.reset();

        assert!(registry.is_empty());
        assert!(registry.get("pump").is_none());
    }

    #[test]
    fn test_names_lists_registered_loggers() {
        let registry = LoggerRegistry::new();
        registry.register(console_config("pump")).unwrap();
        registry.register(console_config("valve")).unwrap();

        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["pump", "valve"]);
    }
}
