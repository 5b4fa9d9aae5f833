// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod log;
pub mod observability;
pub mod reveal;
pub mod session;
pub mod types;

// Re-exports
pub use client::Relay;
pub use error::{Error, Result};
pub use log::ConversationLog;
pub use reveal::{DEFAULT_REVEAL_INTERVAL, RevealTask, reveal};
pub use session::SessionController;
pub use types::{Message, Origin, SessionId, SessionStatus};
