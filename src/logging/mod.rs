//! Structured logging helpers
//!
//! Builds tracing filter directives from [`LoggingConfig`] and generates
//! request correlation IDs.

use uuid::Uuid;

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any component-specific log levels configured in the LoggingConfig.
///
/// # Examples
///
/// ```
/// use radgate::config::LoggingConfig;
/// use radgate::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("storage".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: radgate::config::LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "info,radgate::storage=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",radgate::{}={}", component, level));
        }
    }

    filter_str
}

/// Generate a new request ID using UUID v4
///
/// Returns a unique correlation ID used to tie together the log lines of one
/// ingest or query request.
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
