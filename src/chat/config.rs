//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::reveal::DEFAULT_REVEAL_INTERVAL;

/// Default relay base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Command-line arguments for the uplink-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Base URL of the relay service.
    #[arrrg(optional, "Relay base URL (default: http://localhost:8000/)", "URL")]
    pub base_url: Option<String>,

    /// Target endpoint to connect to on startup.
    #[arrrg(optional, "Target URL to connect to on startup", "URL")]
    pub target: Option<String>,

    /// Reveal pacing in milliseconds.
    #[arrrg(optional, "Milliseconds between revealed characters (default: 20)", "MS")]
    pub reveal_interval_ms: Option<u32>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL of the relay service.
    pub base_url: String,

    /// Optional target endpoint to connect to on startup.
    pub target: Option<String>,

    /// Pacing between revealed characters.
    pub reveal_interval: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Base URL: http://localhost:8000/
    /// - Reveal interval: 20ms
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            target: None,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            use_color: true,
        }
    }

    /// Sets the relay base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the startup target endpoint.
    pub fn with_target(mut self, target: String) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the reveal pacing interval.
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            target: args.target,
            reveal_interval: args
                .reveal_interval_ms
                .map(|ms| Duration::from_millis(u64::from(ms)))
                .unwrap_or(DEFAULT_REVEAL_INTERVAL),
            use_color: !args.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.target.is_none());
        assert_eq!(config.reveal_interval, Duration::from_millis(20));
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.reveal_interval, Duration::from_millis(20));
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            base_url: Some("http://relay.example.com/".to_string()),
            target: Some("http://example.com".to_string()),
            reveal_interval_ms: Some(5),
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.base_url, "http://relay.example.com/");
        assert_eq!(config.target.as_deref(), Some("http://example.com"));
        assert_eq!(config.reveal_interval, Duration::from_millis(5));
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_base_url("http://relay.example.com/".to_string())
            .with_target("http://example.com".to_string())
            .with_reveal_interval(Duration::from_millis(1))
            .without_color();

        assert_eq!(config.base_url, "http://relay.example.com/");
        assert_eq!(config.target.as_deref(), Some("http://example.com"));
        assert_eq!(config.reveal_interval, Duration::from_millis(1));
        assert!(!config.use_color);
    }
}
