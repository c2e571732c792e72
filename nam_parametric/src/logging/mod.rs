//! Global logging for the parametric parser
//!
//! The library never installs a logger on its own. Until a binary calls
//! [`init_global_logging`] (or a test installs a service), every macro is a
//! silent no-op, so parsing stays side-effect free for embedders.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger,
};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach the global logger
pub fn is_enabled(level: LogLevel) -> bool {
    try_get_global_logger().is_some_and(|logger| logger.should_log(level))
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by `log_error!`)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::error(code, message), context);
}

/// Log success with context (used by `log_success!`)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::success(code, message), context);
}

/// Attach context to an event and hand it to the global logger
pub fn log_with_context(mut event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Error logging that falls back to stderr when uninitialized
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_error(code, message);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Shared in-memory logger installed as the global service for unit tests
///
/// Tests run concurrently against the same buffer, so assertions should
/// filter events by a value unique to the test.
#[cfg(test)]
pub(crate) fn test_memory_logger() -> Arc<MemoryLogger> {
    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    MEMORY
        .get_or_init(|| {
            let memory = Arc::new(MemoryLogger::new());
            let service = LoggingService::new(memory.clone(), LogLevel::Debug);
            // Nothing else in the library test binary installs a global service
            let _ = init_global_logging_with_service(Arc::new(service));
            memory
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_log_error_reaches_global_logger() {
        let memory = test_memory_logger();
        let message = "Logging setup failed: preferences already installed";

        safe_log_error(codes::system::INITIALIZATION_FAILURE, message);

        let reported = memory
            .get_errors()
            .into_iter()
            .filter(|event| event.message == message)
            .collect::<Vec<_>>();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].code, codes::system::INITIALIZATION_FAILURE);
        assert_eq!(reported[0].severity(), "Critical");
    }

    #[test]
    fn test_shared_memory_logger_is_installed_once() {
        let first = test_memory_logger();
        let second = test_memory_logger();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(try_get_global_logger().is_some());
        assert!(is_enabled(LogLevel::Debug));
    }
}
