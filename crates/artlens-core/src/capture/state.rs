//! Capture view state types.

use serde::{Deserialize, Serialize};

use crate::art_info::ArtInfo;

/// An encoded still frame, frozen from the live camera feed at the moment of
/// capture.
///
/// Exists only between capture and the next reset/dismiss/stop; there is no
/// retention beyond the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedImage {
    /// Base64-encoded image bytes, without a data-URL prefix.
    pub data: String,
    pub mime_type: String,
}

impl CapturedImage {
    /// A JPEG still, the format the camera surface produces.
    pub fn jpeg(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: "image/jpeg".to_string(),
        }
    }
}

/// The capture view's current mode, a single active variant at any time.
///
/// Every variant past `CameraActive` carries the still frame it refers to,
/// so "analyzing without an image" or "result without an image" cannot be
/// represented at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CaptureState {
    /// No camera, no image. The startup view.
    Idle,
    /// A live camera track is open in the host view.
    CameraActive,
    /// A still frame was just frozen from the feed.
    ImageCaptured { image: CapturedImage },
    /// The frame is on its way to the vision service.
    Analyzing { image: CapturedImage },
    /// The service answered; the overlay shows the result.
    ResultReady { image: CapturedImage, info: ArtInfo },
    /// The query failed; the overlay shows a dismissible message.
    Failed { image: CapturedImage, message: String },
}

impl CaptureState {
    /// The still frame the current state refers to, if any.
    pub fn captured_image(&self) -> Option<&CapturedImage> {
        match self {
            Self::Idle | Self::CameraActive => None,
            Self::ImageCaptured { image }
            | Self::Analyzing { image }
            | Self::ResultReady { image, .. }
            | Self::Failed { image, .. } => Some(image),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing { .. })
    }
}
