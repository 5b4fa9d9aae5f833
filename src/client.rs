use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use url::Url;

use crate::error::{Error, Result};
use crate::observability::{
    EXCHANGE_ERRORS, EXCHANGE_REQUESTS, INITIATE_ERRORS, INITIATE_REQUESTS, MALFORMED_RESPONSES,
};
use crate::types::{
    ErrorBody, ExchangeRequest, ExchangeResponse, InitiateRequest, InitiateResponse, SessionId,
};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the relay service.
///
/// The relay exposes exactly two operations: initiate a session against a
/// target URL, and exchange one message within an established session.
/// Everything else in the crate builds on these two calls.
#[derive(Debug, Clone)]
pub struct Relay {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl Relay {
    /// Create a new relay client against the default local base URL.
    pub fn new() -> Result<Self> {
        Self::with_options(None, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // Fail on construction rather than on first request.
        Url::parse(&base_url)?;
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{base_url}/")
        };

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create and return default headers for relay requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Extract the human-readable detail from a non-success response.
    ///
    /// The relay's error payloads carry a `detail` string; if the body is
    /// not the expected JSON shape, the raw body stands in so the caller
    /// still has something to show.
    async fn error_detail(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.detail,
            Err(_) if !body.trim().is_empty() => Some(body.trim().to_string()),
            Err(_) => None,
        }
    }

    /// Ask the relay to establish a session against `target`.
    ///
    /// Any transport failure or non-success response maps to
    /// [`Error::ConnectionRefused`]; a success response that cannot be
    /// parsed maps to [`Error::MalformedResponse`].
    pub async fn initiate(&self, target: &str) -> Result<SessionId> {
        INITIATE_REQUESTS.click();
        let url = format!("{}init_session", self.base_url);
        let params = InitiateRequest {
            url: target.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                INITIATE_ERRORS.click();
                Error::connection_refused(Some(e.to_string()))
            })?;

        if !response.status().is_success() {
            INITIATE_ERRORS.click();
            return Err(Error::connection_refused(
                Self::error_detail(response).await,
            ));
        }

        let parsed = response.json::<InitiateResponse>().await.map_err(|e| {
            INITIATE_ERRORS.click();
            MALFORMED_RESPONSES.click();
            Error::malformed_response(
                format!("Failed to parse initiate response: {}", e),
                Some(Box::new(e)),
            )
        })?;
        Ok(parsed.session_id)
    }

    /// Send one message within an established session and return the reply.
    ///
    /// Any transport failure or non-success response maps to
    /// [`Error::TransmissionLost`]; a success response that cannot be
    /// parsed maps to [`Error::MalformedResponse`].
    pub async fn exchange(&self, session_id: &SessionId, message: &str) -> Result<String> {
        EXCHANGE_REQUESTS.click();
        let url = format!("{}chat", self.base_url);
        let params = ExchangeRequest {
            session_id: session_id.clone(),
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                EXCHANGE_ERRORS.click();
                Error::transmission_lost(Some(e.to_string()))
            })?;

        if !response.status().is_success() {
            EXCHANGE_ERRORS.click();
            return Err(Error::transmission_lost(
                Self::error_detail(response).await,
            ));
        }

        let parsed = response.json::<ExchangeResponse>().await.map_err(|e| {
            EXCHANGE_ERRORS.click();
            MALFORMED_RESPONSES.click();
            Error::malformed_response(
                format!("Failed to parse exchange response: {}", e),
                Some(Box::new(e)),
            )
        })?;
        Ok(parsed.response)
    }
}
