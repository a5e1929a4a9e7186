//! Credential gate commands.
//!
//! The gate must pass once per app run before the capture view is shown;
//! the frontend calls `check_session` on startup and `login` from the gate
//! form.

use tauri::State;

use crate::app::AppState;

/// Verifies a submitted username/password pair and establishes the session.
///
/// # Errors
///
/// Returns the opaque credential error; the message never reveals whether
/// the username or the password was wrong.
#[tauri::command]
pub async fn login(
    username: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .credential_gate
        .verify(&username, &password)
        .await
        .map_err(|e| e.to_string())
}

/// Whether a valid (unexpired) session exists.
///
/// Expiry is evaluated lazily here; an expired session is cleared from the
/// store as a side effect.
#[tauri::command]
pub async fn check_session(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.credential_gate.is_session_valid().await)
}
