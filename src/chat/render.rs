//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction over the
//! terminal. The default implementation uses ANSI escape codes to style the
//! two speakers' tags: cyan for the remote agent, yellow for the local
//! user.

use std::io::{self, Stdout, Write};

use crate::types::Origin;

/// ANSI escape code for cyan text (remote agent tag).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (local user tag).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Speaker tag for remote messages.
const REMOTE_TAG: &str = "> [GLITCH_AI]:";

/// Speaker tag for local messages.
const LOCAL_TAG: &str = "> [USER]:";

/// Trait for rendering chat output.
///
/// The reveal stream drives [`Renderer::print_text`] with incremental
/// chunks, so implementations must not buffer whole lines.
pub trait Renderer: Send {
    /// Print the speaker tag that opens a message.
    fn start_message(&mut self, origin: Origin);

    /// Print a chunk of message text.
    ///
    /// Called incrementally as the reveal stream emits prefixes; each call
    /// carries only the newly revealed characters.
    fn print_text(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Called when a message is complete.
    ///
    /// Used to ensure proper newlines and cleanup after a reveal.
    fn finish_message(&mut self);

    /// Called when a reveal is interrupted by the user.
    fn print_interrupted(&mut self);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout to ensure immediate display of revealed content.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn start_message(&mut self, origin: Origin) {
        let (tag, color) = match origin {
            Origin::Remote => (REMOTE_TAG, ANSI_CYAN),
            Origin::Local => (LOCAL_TAG, ANSI_YELLOW),
        };
        if self.use_color {
            println!("{color}{tag}{ANSI_RESET}");
        } else {
            println!("{tag}");
        }
        self.flush();
    }

    fn print_text(&mut self, text: &str) {
        print!("{text}");
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("\nError: {error}");
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
    }

    fn finish_message(&mut self) {
        println!();
        self.flush();
    }

    fn print_interrupted(&mut self) {
        println!("\n[interrupted]");
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }
}
