//! Session lifecycle and message exchange.
//!
//! This module provides the [`SessionController`], which owns the session
//! state machine (idle, connecting, active, failed), the conversation log
//! for the current session, and the busy flag that serializes remote
//! operations. All communication with the relay goes through it.

use crate::client::Relay;
use crate::error::{Error, Result};
use crate::log::ConversationLog;
use crate::observability::{LOG_APPENDS, SESSIONS_ACTIVATED, SESSIONS_FAILED};
use crate::types::{Message, SessionId, SessionStatus};

/// Fallback detail for an initiate failure with no service-supplied reason.
const FALLBACK_CONNECT_DETAIL: &str = "Connection refused";

/// Fallback detail for an exchange failure with no service-supplied reason.
const FALLBACK_EXCHANGE_DETAIL: &str = "Transmission lost";

/// Owns one session against the relay and serializes its state transitions.
///
/// The controller is the only component that talks to the relay. Interaction
/// surfaces feed it endpoint and message strings, observe [`SessionStatus`],
/// the busy flag, and the conversation log, and render from log snapshots.
///
/// `initiate` and `exchange` take `&mut self`, so overlapping calls are
/// unrepresentable; the busy flag is additionally maintained with
/// guaranteed-release semantics as the caller-visible signal, set before a
/// request goes out and cleared on every exit path.
pub struct SessionController {
    client: Relay,
    status: SessionStatus,
    session_id: Option<SessionId>,
    target: Option<String>,
    log: ConversationLog,
    busy: bool,
}

impl SessionController {
    /// Creates a controller with no session.
    pub fn new(client: Relay) -> Self {
        Self {
            client,
            status: SessionStatus::Idle,
            session_id: None,
            target: None,
            log: ConversationLog::new(),
            busy: false,
        }
    }

    /// Establishes a session against the trimmed `endpoint`.
    ///
    /// On success the session becomes `Active`, the id is assigned exactly
    /// once, and a fresh log is seeded with the connection banner. On
    /// failure the session becomes `Failed`, the id stays unassigned, and a
    /// fresh log is seeded with the failure banner; retrying is permitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty endpoint, while another
    /// operation is outstanding, or while a session is already `Active` or
    /// `Connecting`. Returns the relay's error after a failed request.
    pub async fn initiate(&mut self, endpoint: &str) -> Result<SessionId> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::validation(
                "endpoint must not be empty",
                Some("endpoint".to_string()),
            ));
        }
        if self.busy {
            return Err(Error::validation(
                "an operation is already outstanding",
                Some("busy".to_string()),
            ));
        }
        if matches!(
            self.status,
            SessionStatus::Active | SessionStatus::Connecting
        ) {
            return Err(Error::validation(
                "a session is already established",
                Some("status".to_string()),
            ));
        }

        self.busy = true;
        self.status = SessionStatus::Connecting;
        let result = self.client.initiate(endpoint).await;
        self.busy = false;

        match result {
            Ok(session_id) => {
                self.session_id = Some(session_id.clone());
                self.status = SessionStatus::Active;
                self.target = Some(endpoint.to_string());
                self.log = ConversationLog::new();
                self.push(Message::remote(established_banner(endpoint)));
                SESSIONS_ACTIVATED.click();
                Ok(session_id)
            }
            Err(err) => {
                self.status = SessionStatus::Failed;
                self.session_id = None;
                self.log = ConversationLog::new();
                self.push(Message::remote(connect_failed_banner(&err)));
                SESSIONS_FAILED.click();
                Err(err)
            }
        }
    }

    /// Sends one message within the active session and returns the reply.
    ///
    /// The local message is appended to the log before the request goes out,
    /// so it is visible regardless of how long the relay takes to answer. A
    /// failed exchange appends one explanatory remote entry and leaves the
    /// session `Active`; only the initiate path can fail a session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when no session is active, when the
    /// message is empty after trimming, or while another operation is
    /// outstanding. Returns the relay's error after a failed request.
    pub async fn exchange(&mut self, message: &str) -> Result<String> {
        let Some(session_id) = self.session_id.clone() else {
            return Err(Error::validation(
                "no active session",
                Some("status".to_string()),
            ));
        };
        if !self.status.is_active() {
            return Err(Error::validation(
                "no active session",
                Some("status".to_string()),
            ));
        }
        if message.trim().is_empty() {
            return Err(Error::validation(
                "message must not be empty",
                Some("message".to_string()),
            ));
        }
        if self.busy {
            return Err(Error::validation(
                "an operation is already outstanding",
                Some("busy".to_string()),
            ));
        }

        self.push(Message::local(message));

        self.busy = true;
        let result = self.client.exchange(&session_id, message).await;
        self.busy = false;

        match result {
            Ok(reply) => {
                self.push(Message::remote(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                self.push(Message::remote(exchange_failed_banner(&err)));
                Err(err)
            }
        }
    }

    /// Returns the current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the assigned session id, if the session is active.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Returns the endpoint the active session was initiated against.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Returns true while an initiate or exchange request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the conversation log for the current session.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    fn push(&mut self, message: Message) {
        LOG_APPENDS.click();
        self.log.append(message);
    }
}

/// Banner seeded into the log when a session becomes active.
fn established_banner(target: &str) -> String {
    format!("[CONNECTION ESTABLISHED]\nAccessing target: {target}\nI am online. State your query.")
}

/// Banner seeded into the log when an initiate request fails.
fn connect_failed_banner(err: &Error) -> String {
    let detail = err.detail().unwrap_or(FALLBACK_CONNECT_DETAIL);
    format!("[CONNECTION FAILED]\nError: {detail}")
}

/// Entry appended when an exchange request fails.
fn exchange_failed_banner(err: &Error) -> String {
    let detail = err.detail().unwrap_or(FALLBACK_EXCHANGE_DETAIL);
    format!("[ERROR]\nSignal corrupted: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SessionController {
        SessionController::new(Relay::new().unwrap())
    }

    #[tokio::test]
    async fn new_controller_is_idle() {
        let controller = controller();
        assert_eq!(controller.status(), SessionStatus::Idle);
        assert!(controller.session_id().is_none());
        assert!(controller.target().is_none());
        assert!(!controller.is_busy());
        assert!(controller.log().is_empty());
    }

    #[tokio::test]
    async fn initiate_rejects_empty_endpoint() {
        let mut controller = controller();
        let err = controller.initiate("   ").await.unwrap_err();
        assert!(err.is_validation());
        // A rejected precondition never transitions the state machine.
        assert_eq!(controller.status(), SessionStatus::Idle);
        assert!(controller.log().is_empty());
    }

    #[tokio::test]
    async fn exchange_rejects_without_active_session() {
        let mut controller = controller();
        let err = controller.exchange("hello").await.unwrap_err();
        assert!(err.is_validation());
        assert!(controller.log().is_empty());
    }

    #[tokio::test]
    async fn exchange_rejects_empty_message() {
        let mut controller = controller();
        // Force an active session without the network.
        controller.session_id = Some(SessionId::new("abc123"));
        controller.status = SessionStatus::Active;
        let err = controller.exchange("  \n ").await.unwrap_err();
        assert!(err.is_validation());
        assert!(controller.log().is_empty());
    }

    #[tokio::test]
    async fn failed_initiate_seeds_failure_banner_and_clears_busy() {
        // Nothing listens on the discard port, so the connect is refused.
        let client = Relay::with_options(Some("http://127.0.0.1:9/".to_string()), None).unwrap();
        let mut controller = SessionController::new(client);

        let err = controller.initiate("http://example.com").await.unwrap_err();
        assert!(err.is_connection_refused());
        assert_eq!(controller.status(), SessionStatus::Failed);
        assert!(controller.session_id().is_none());
        assert!(!controller.is_busy());

        let messages = controller.log().snapshot();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].origin, crate::types::Origin::Remote);
        assert!(messages[0].text.starts_with("[CONNECTION FAILED]\nError: "));
    }

    #[test]
    fn banners_match_the_wire_detail() {
        assert_eq!(
            established_banner("http://example.com"),
            "[CONNECTION ESTABLISHED]\nAccessing target: http://example.com\nI am online. State your query."
        );
        let err = Error::connection_refused(Some("quota exceeded".to_string()));
        assert_eq!(
            connect_failed_banner(&err),
            "[CONNECTION FAILED]\nError: quota exceeded"
        );
        let err = Error::connection_refused(None);
        assert_eq!(
            connect_failed_banner(&err),
            "[CONNECTION FAILED]\nError: Connection refused"
        );
        let err = Error::transmission_lost(None);
        assert_eq!(
            exchange_failed_banner(&err),
            "[ERROR]\nSignal corrupted: Transmission lost"
        );
    }
}
