// Error types module

use thiserror::Error;

/// Centralized error type for URL construction
///
/// Overlay and underlay application never fails. Besides the surrounding
/// steps (loading configuration, parsing option input, building the handle),
/// only options a plugin cannot honour at all are reported.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Configuration errors (invalid YAML, missing env vars, bad cloud name)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The options did not name a source asset
    #[error("Missing source: `src` must name a public ID")]
    MissingSource,

    /// Option input could not be parsed as JSON
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Plugin options that contradict each other
    #[error("Invalid {plugin} options: {message}")]
    InvalidPluginOptions {
        plugin: &'static str,
        message: String,
    },

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoaderError {
    pub fn config(message: impl Into<String>) -> Self {
        LoaderError::Config(message.into())
    }

    pub fn invalid_plugin_options(plugin: &'static str, message: impl Into<String>) -> Self {
        LoaderError::InvalidPluginOptions {
            plugin,
            message: message.into(),
        }
    }
}
