//! Core data types shared by the client, the session controller, and the
//! conversation log, plus the serde shapes of the relay's wire payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque session identifier assigned by the relay.
///
/// A `SessionId` is assigned exactly once per session when an initiate
/// request succeeds and never changes for that session's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        SessionId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        SessionId(id)
    }
}

/// Who produced a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The local user typed it.
    Local,
    /// The remote agent answered with it.
    Remote,
}

/// One entry in the conversation log.
///
/// The text is complete when the message is constructed; paced display is
/// the reveal stream's job, not the message's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message.
    pub origin: Origin,
    /// The full message content.
    pub text: String,
}

impl Message {
    /// Creates a message originating from the local user.
    pub fn local(text: impl Into<String>) -> Self {
        Message {
            origin: Origin::Local,
            text: text.into(),
        }
    }

    /// Creates a message originating from the remote agent.
    pub fn remote(text: impl Into<String>) -> Self {
        Message {
            origin: Origin::Remote,
            text: text.into(),
        }
    }
}

/// Lifecycle state of a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No session has been initiated.
    #[default]
    Idle,
    /// An initiate request is outstanding.
    Connecting,
    /// The relay accepted the initiate request and assigned a session id.
    Active,
    /// The last initiate request failed; retrying is permitted.
    Failed,
}

impl SessionStatus {
    /// Returns true if the session can accept exchange requests.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Connecting => write!(f, "connecting"),
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Request body for the initiate operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitiateRequest {
    /// The target resource the relay should ingest.
    pub url: String,
}

/// Success body for the initiate operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitiateResponse {
    /// The assigned session identifier.
    pub session_id: SessionId,
}

/// Request body for the exchange operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeRequest {
    /// The session the message belongs to.
    pub session_id: SessionId,
    /// The user's message.
    pub message: String,
}

/// Success body for the exchange operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeResponse {
    /// The remote agent's reply text.
    pub response: String,
}

/// Error payload the relay attaches to non-success responses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure detail, if the service supplied one.
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_transparent() {
        let id: SessionId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id, SessionId::new("abc123"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }

    #[test]
    fn initiate_request_shape() {
        let req = InitiateRequest {
            url: "http://example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            "{\"url\":\"http://example.com\"}"
        );
    }

    #[test]
    fn exchange_request_shape() {
        let req = ExchangeRequest {
            session_id: SessionId::new("abc123"),
            message: "hello".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["session_id"], "abc123");
        assert_eq!(json["message"], "hello");
    }

    #[test]
    fn exchange_response_shape() {
        let resp: ExchangeResponse =
            serde_json::from_str("{\"response\":\"hi there\"}").unwrap();
        assert_eq!(resp.response, "hi there");
    }

    #[test]
    fn error_body_detail_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
        let body: ErrorBody = serde_json::from_str("{\"detail\":\"quota exceeded\"}").unwrap();
        assert_eq!(body.detail.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn message_constructors() {
        let local = Message::local("hello");
        assert_eq!(local.origin, Origin::Local);
        let remote = Message::remote("hi there");
        assert_eq!(remote.origin, Origin::Remote);
    }

    #[test]
    fn status_default_is_idle() {
        assert_eq!(SessionStatus::default(), SessionStatus::Idle);
        assert!(!SessionStatus::Idle.is_active());
        assert!(SessionStatus::Active.is_active());
        assert_eq!(SessionStatus::Connecting.to_string(), "connecting");
    }
}
