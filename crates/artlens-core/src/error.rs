//! Error types for the ArtLens application.
//!
//! Three independent taxonomies: credential checks ([`AuthError`]), camera
//! startup ([`CameraError`]) and remote art queries ([`QueryError`]). Every
//! variant renders as user-facing text via `Display`; none is fatal to the
//! process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a raw service message carried by [`QueryError::Other`].
const OTHER_MESSAGE_LIMIT: usize = 200;

/// Credential verification failure.
///
/// A single opaque variant: whether the username or the password was wrong is
/// deliberately not distinguishable from the message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthError {
    #[error("The username or password is incorrect")]
    InvalidCredentials,
}

/// Camera startup failure.
///
/// Surfaced in the idle view only; a camera that could not start never
/// produces an analysis error overlay.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraError {
    #[error("Could not access the camera. Grant permission and try again.")]
    AccessDenied,
}

/// Failure of a remote art query, classified into user-actionable categories.
///
/// The classification itself lives in the interaction layer; these variants
/// are the stable taxonomy it maps onto, in priority order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryError {
    /// The backing generative API is not enabled for the project.
    #[error(
        "The Generative Language API is not enabled.\n\n\
         To enable it:\n\
         1. Open the Google Cloud console\n\
         2. Enable the Generative Language API\n\
         3. Wait a few minutes and try again\n\n\
         Details: {activation_url}"
    )]
    ServiceNotEnabled { activation_url: String },

    /// The configured API key is missing or malformed.
    #[error("The API key is not configured correctly. Check the secret settings.")]
    InvalidApiKey,

    /// The service refused the request because a usage limit was reached.
    #[error("The API usage limit has been reached. Wait a while and try again.")]
    QuotaExceeded,

    /// The request never reached the service.
    #[error("A network error occurred. Check your internet connection.")]
    NetworkFailure,

    /// The service rejected the credentials attached to the request.
    #[error("Authentication with the AI service failed. Check that the API key is valid.")]
    Unauthenticated,

    /// The service rejected the request payload.
    #[error("The request was invalid. Check the image format.")]
    InvalidArgument,

    /// The service answered, but not with the expected document shape.
    #[error("The service response did not match the expected shape.")]
    MalformedResponse,

    /// An unrecognized service message, passed through (truncated).
    #[error("AI service error: {0}")]
    Other(String),

    /// No diagnostic information was available at all.
    #[error("Could not retrieve artwork information. Try again with a clearer image.")]
    Unknown,
}

impl QueryError {
    /// Creates a [`QueryError::Other`] from a raw service message, truncating
    /// anything past 200 characters with an ellipsis.
    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.chars().count() > OTHER_MESSAGE_LIMIT {
            let truncated: String = message.chars().take(OTHER_MESSAGE_LIMIT).collect();
            Self::Other(format!("{truncated}..."))
        } else {
            Self::Other(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_keeps_short_messages_intact() {
        let err = QueryError::other("model overloaded");
        assert_eq!(err, QueryError::Other("model overloaded".to_string()));
    }

    #[test]
    fn test_other_truncates_long_messages() {
        let long = "x".repeat(450);
        let QueryError::Other(message) = QueryError::other(long) else {
            panic!("expected Other");
        };
        assert_eq!(message.chars().count(), 203);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_auth_error_message_is_opaque() {
        let message = AuthError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("username only"));
        assert_eq!(message, "The username or password is incorrect");
    }
}
