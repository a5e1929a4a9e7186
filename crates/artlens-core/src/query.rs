//! Art query contract.
//!
//! The capture flow depends on this trait rather than a concrete client, so
//! tests can drive the state machine with a stub and the interaction layer
//! can swap transports without touching the controller.

use crate::art_info::ArtInfo;
use crate::capture::CapturedImage;
use crate::error::QueryError;

/// Maps a captured still frame to structured art information.
#[async_trait::async_trait]
pub trait ArtQuery: Send + Sync {
    /// Sends the image to the remote vision service and parses the result.
    ///
    /// An unidentified painting is a *successful* query: the service then
    /// explains the failure in `description` and may leave the other fields
    /// empty.
    async fn query(&self, image: &CapturedImage) -> Result<ArtInfo, QueryError>;
}
