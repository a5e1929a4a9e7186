//! Capture workflow commands.
//!
//! The webview owns the physical camera; these commands keep the Rust-side
//! state machine authoritative. Every command returns the resulting
//! [`CaptureState`] so the frontend renders exactly what the controller
//! decided.

use artlens_core::capture::{CaptureState, CapturedImage};
use artlens_core::query::ArtQuery;
use artlens_interaction::GeminiArtAgent;
use tauri::State;

use crate::app::AppState;

/// The controller's current state, for view restoration.
#[tauri::command]
pub async fn current_state(state: State<'_, AppState>) -> Result<CaptureState, String> {
    Ok(state.capture.lock().await.state().clone())
}

/// The webview reports that the live camera track opened.
#[tauri::command]
pub async fn camera_started(state: State<'_, AppState>) -> Result<CaptureState, String> {
    let mut controller = state.capture.lock().await;
    controller.camera_started();
    Ok(controller.state().clone())
}

/// The webview reports that the camera could not be started.
///
/// Returns the user-facing startup message; the state stays idle and the
/// error belongs to the startup view, not the analysis overlay.
#[tauri::command]
pub async fn camera_failed(state: State<'_, AppState>) -> Result<String, String> {
    let controller = state.capture.lock().await;
    Ok(controller.camera_denied().to_string())
}

/// The webview reports that the camera track was released.
#[tauri::command]
pub async fn camera_stopped(state: State<'_, AppState>) -> Result<CaptureState, String> {
    let mut controller = state.capture.lock().await;
    controller.camera_stopped();
    Ok(controller.state().clone())
}

/// Freezes the submitted frame and runs the art query against it.
///
/// A capture while another query is in flight is dropped (the current state
/// is returned unchanged). The state lock is *not* held across the network
/// round trip; the outcome is applied afterwards through the request token,
/// so a stale response can never overwrite newer state.
#[tauri::command]
pub async fn capture_and_analyze(
    image_base64: String,
    state: State<'_, AppState>,
) -> Result<CaptureState, String> {
    let image = CapturedImage::jpeg(image_base64);

    let token = {
        let mut controller = state.capture.lock().await;
        if !controller.capture_frame(image.clone()) {
            return Ok(controller.state().clone());
        }
        match controller.begin_analysis() {
            Some(token) => token,
            None => return Ok(controller.state().clone()),
        }
    };

    tracing::info!("[Capture] Querying art information");
    let outcome = match GeminiArtAgent::try_from_secrets(state.secret_service.as_ref()).await {
        Ok(agent) => agent.query(&image).await,
        Err(err) => Err(err),
    };
    if let Err(err) = &outcome {
        tracing::warn!("[Capture] Query failed: {}", err);
    }

    let mut controller = state.capture.lock().await;
    if !controller.complete(token, outcome) {
        tracing::debug!("[Capture] Query settled after the view moved on, dropped");
    }
    Ok(controller.state().clone())
}

/// Leaves the result or error overlay and returns to the live camera.
#[tauri::command]
pub async fn reset_view(state: State<'_, AppState>) -> Result<CaptureState, String> {
    let mut controller = state.capture.lock().await;
    controller.reset();
    Ok(controller.state().clone())
}

/// Dismisses the error overlay back to the startup view.
#[tauri::command]
pub async fn dismiss_error(state: State<'_, AppState>) -> Result<CaptureState, String> {
    let mut controller = state.capture.lock().await;
    controller.dismiss();
    Ok(controller.state().clone())
}
