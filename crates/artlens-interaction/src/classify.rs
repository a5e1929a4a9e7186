//! Service-fault model and error classification.
//!
//! A failed Gemini call is first normalized into a [`ServiceFault`], then
//! run through a prioritized rule table that maps it onto the stable
//! [`QueryError`] taxonomy. The rules are evaluated in order and the first
//! match wins, so the table below *is* the classification policy.

use artlens_core::error::QueryError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Console page for enabling the Generative Language API, used when the
/// error payload carries no activation URL of its own.
pub const DEFAULT_ACTIVATION_URL: &str =
    "https://console.developers.google.com/apis/api/generativelanguage.googleapis.com/overview";

/// A normalized view of a failed service call.
///
/// Built either from an HTTP error response (status plus the Google error
/// JSON body) or from a transport failure that never produced a response.
#[derive(Debug, Clone, Default)]
pub struct ServiceFault {
    /// HTTP status, when a response was received.
    pub status_code: Option<u16>,
    /// Google RPC status text, e.g. `PERMISSION_DENIED`.
    pub status_text: Option<String>,
    /// Human-readable message from the error payload, or the raw body.
    pub message: Option<String>,
    /// Structured detail entries from the error payload.
    pub details: Vec<FaultDetail>,
    /// Set when the request failed before any response arrived.
    pub transport_failure: bool,
}

/// One entry of the error payload's `details[]` array.
#[derive(Debug, Clone, Default)]
pub struct FaultDetail {
    pub reason: Option<String>,
    pub activation_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
    #[serde(default)]
    details: Vec<DetailBody>,
}

#[derive(Deserialize)]
struct DetailBody {
    reason: Option<String>,
    #[serde(default)]
    metadata: Option<DetailMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailMetadata {
    activation_url: Option<String>,
}

impl ServiceFault {
    /// Builds a fault from an HTTP error response.
    ///
    /// The body is expected to be the Google error JSON envelope; a body
    /// that doesn't parse is carried verbatim as the message.
    pub fn from_http(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorWrapper>(body) {
            Ok(wrapper) => Self {
                status_code: Some(status.as_u16()),
                status_text: wrapper.error.status,
                message: wrapper.error.message,
                details: wrapper
                    .error
                    .details
                    .into_iter()
                    .map(|detail| FaultDetail {
                        reason: detail.reason,
                        activation_url: detail.metadata.and_then(|m| m.activation_url),
                    })
                    .collect(),
                transport_failure: false,
            },
            Err(_) => Self {
                status_code: Some(status.as_u16()),
                status_text: None,
                message: (!body.trim().is_empty()).then(|| body.trim().to_string()),
                details: Vec::new(),
                transport_failure: false,
            },
        }
    }

    /// Builds a fault from a transport error that produced no response.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        Self {
            status_code: None,
            status_text: None,
            message: Some(err.to_string()),
            details: Vec::new(),
            transport_failure: err.is_connect() || err.is_timeout() || err.is_request(),
        }
    }

    fn message_contains(&self, markers: &[&str]) -> bool {
        let Some(message) = &self.message else {
            return false;
        };
        markers.iter().any(|marker| message.contains(marker))
    }
}

type Predicate = fn(&ServiceFault) -> bool;
type Build = fn(&ServiceFault) -> QueryError;

/// The classification policy, highest priority first.
const RULES: &[(Predicate, Build)] = &[
    (is_service_disabled, build_service_not_enabled),
    (mentions_api_key, build_invalid_api_key),
    (is_quota_exceeded, build_quota_exceeded),
    (is_network_failure, build_network_failure),
    (is_unauthenticated, build_unauthenticated),
    (is_invalid_argument, build_invalid_argument),
];

/// Maps a service fault onto the [`QueryError`] taxonomy.
///
/// Falls through to [`QueryError::Other`] for an unrecognized message and
/// [`QueryError::Unknown`] when there is no message at all.
pub fn classify(fault: &ServiceFault) -> QueryError {
    for (matches, build) in RULES {
        if matches(fault) {
            return build(fault);
        }
    }
    match &fault.message {
        Some(message) if !message.trim().is_empty() => QueryError::other(message.clone()),
        _ => QueryError::Unknown,
    }
}

fn is_service_disabled(fault: &ServiceFault) -> bool {
    fault.status_code == Some(403)
        || fault.status_text.as_deref() == Some("PERMISSION_DENIED")
        || fault.message_contains(&[
            "SERVICE_DISABLED",
            "has not been used",
            "is disabled",
            "Enable it by visiting",
        ])
        || fault
            .details
            .iter()
            .any(|detail| detail.reason.as_deref() == Some("SERVICE_DISABLED"))
}

fn build_service_not_enabled(fault: &ServiceFault) -> QueryError {
    let activation_url = fault
        .details
        .iter()
        .find_map(|detail| detail.activation_url.clone())
        .unwrap_or_else(|| DEFAULT_ACTIVATION_URL.to_string());
    QueryError::ServiceNotEnabled { activation_url }
}

fn mentions_api_key(fault: &ServiceFault) -> bool {
    fault.message_contains(&["API_KEY", "apiKey", "API key"])
}

fn build_invalid_api_key(_fault: &ServiceFault) -> QueryError {
    QueryError::InvalidApiKey
}

fn is_quota_exceeded(fault: &ServiceFault) -> bool {
    fault.status_code == Some(429) || fault.message_contains(&["quota", "limit", "429"])
}

fn build_quota_exceeded(_fault: &ServiceFault) -> QueryError {
    QueryError::QuotaExceeded
}

fn is_network_failure(fault: &ServiceFault) -> bool {
    fault.transport_failure || fault.message_contains(&["network", "fetch", "ECONNREFUSED"])
}

fn build_network_failure(_fault: &ServiceFault) -> QueryError {
    QueryError::NetworkFailure
}

fn is_unauthenticated(fault: &ServiceFault) -> bool {
    fault.status_code == Some(401) || fault.message_contains(&["UNAUTHENTICATED"])
}

fn build_unauthenticated(_fault: &ServiceFault) -> QueryError {
    QueryError::Unauthenticated
}

fn is_invalid_argument(fault: &ServiceFault) -> bool {
    fault.status_code == Some(400) || fault.message_contains(&["INVALID_ARGUMENT"])
}

fn build_invalid_argument(_fault: &ServiceFault) -> QueryError {
    QueryError::InvalidArgument
}
