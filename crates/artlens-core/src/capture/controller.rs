//! Capture controller.
//!
//! Owns the view state machine and serializes the capture-and-query
//! workflow: at most one query is in flight at a time, and only the response
//! matching the current request token is ever applied.

use crate::art_info::ArtInfo;
use crate::capture::state::{CaptureState, CapturedImage};
use crate::error::{CameraError, QueryError};

/// Token identifying one analysis request.
///
/// Issued by [`CaptureController::begin_analysis`] and checked again in
/// [`CaptureController::complete`]; a token from a request the user has
/// since navigated away from no longer matches and its late result is
/// dropped instead of overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken(u64);

/// State machine for the camera/capture/result view.
///
/// The controller itself is synchronous; callers hold it behind a lock and
/// run the actual query between `begin_analysis` and `complete`.
#[derive(Debug)]
pub struct CaptureController {
    state: CaptureState,
    /// Monotonically increasing request generation. Bumped when an analysis
    /// starts and whenever an in-flight request is invalidated.
    generation: u64,
}

impl Default for CaptureController {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureController {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// The host view reports that the live camera track opened.
    ///
    /// Moves `Idle` to `CameraActive`; already being in `CameraActive` is
    /// fine (reset/retry restart the camera themselves and the host confirms
    /// afterwards). Any other state keeps its variant.
    pub fn camera_started(&mut self) {
        match self.state {
            CaptureState::Idle => {
                tracing::debug!("[Capture] Camera started");
                self.state = CaptureState::CameraActive;
            }
            CaptureState::CameraActive => {}
            _ => {
                tracing::debug!("[Capture] Ignoring camera start in state {:?}", self.state);
            }
        }
    }

    /// The host view reports that the camera could not be started.
    ///
    /// The state stays `Idle` and the error belongs to the startup view;
    /// a camera that never opened is not an analysis failure and must not
    /// populate `Failed`.
    pub fn camera_denied(&self) -> CameraError {
        tracing::warn!("[Capture] Camera access denied");
        CameraError::AccessDenied
    }

    /// The host view reports that the live camera track was released.
    ///
    /// Returns to `Idle` from any state, discarding the captured image and
    /// any result. Stopping while a query is in flight also invalidates its
    /// token, so the late response is dropped.
    pub fn camera_stopped(&mut self) {
        if self.state.is_analyzing() {
            tracing::debug!("[Capture] Camera stopped mid-query, invalidating request");
            self.generation += 1;
        }
        self.state = CaptureState::Idle;
    }

    /// Freezes a still frame from the live feed.
    ///
    /// Only valid while `CameraActive`; in every other state the frame is
    /// dropped and `false` is returned. In particular a second capture while
    /// a query is in flight is a no-op, not a queued request.
    pub fn capture_frame(&mut self, image: CapturedImage) -> bool {
        match self.state {
            CaptureState::CameraActive => {
                self.state = CaptureState::ImageCaptured { image };
                true
            }
            CaptureState::Analyzing { .. } => {
                tracing::debug!("[Capture] Dropping capture while a query is in flight");
                false
            }
            _ => {
                tracing::debug!("[Capture] Dropping capture in state {:?}", self.state);
                false
            }
        }
    }

    /// Starts the analysis of the captured frame, clearing any previous
    /// result or error.
    ///
    /// Returns the token the caller must present to [`complete`], or `None`
    /// if there is no freshly captured frame.
    ///
    /// [`complete`]: CaptureController::complete
    pub fn begin_analysis(&mut self) -> Option<QueryToken> {
        let CaptureState::ImageCaptured { image } = &self.state else {
            return None;
        };
        let image = image.clone();
        self.generation += 1;
        self.state = CaptureState::Analyzing { image };
        tracing::debug!("[Capture] Analysis {} started", self.generation);
        Some(QueryToken(self.generation))
    }

    /// Applies a settled query outcome.
    ///
    /// The outcome lands only if `token` still matches the current
    /// generation and the view is still `Analyzing`; otherwise it is stale
    /// (the user stopped the camera or a newer request superseded it) and is
    /// dropped. Returns whether the outcome was applied.
    pub fn complete(&mut self, token: QueryToken, outcome: Result<ArtInfo, QueryError>) -> bool {
        if token.0 != self.generation {
            tracing::debug!("[Capture] Dropping stale result for request {}", token.0);
            return false;
        }
        let CaptureState::Analyzing { image } = &self.state else {
            tracing::debug!("[Capture] Dropping result, view left Analyzing");
            return false;
        };
        let image = image.clone();
        self.state = match outcome {
            Ok(info) => CaptureState::ResultReady { image, info },
            Err(err) => CaptureState::Failed {
                image,
                message: err.to_string(),
            },
        };
        true
    }

    /// Leaves the result or error overlay and restarts the camera.
    ///
    /// Returns `false` (and does nothing) outside `ResultReady`/`Failed`.
    pub fn reset(&mut self) -> bool {
        match self.state {
            CaptureState::ResultReady { .. } | CaptureState::Failed { .. } => {
                self.state = CaptureState::CameraActive;
                true
            }
            _ => false,
        }
    }

    /// Dismisses the error overlay back to the startup view.
    ///
    /// Returns `false` (and does nothing) outside `Failed`.
    pub fn dismiss(&mut self) -> bool {
        match self.state {
            CaptureState::Failed { .. } => {
                self.state = CaptureState::Idle;
                true
            }
            _ => false,
        }
    }
}
