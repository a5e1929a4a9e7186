pub mod auth;
pub mod capture;

pub use auth::*;
pub use capture::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        auth::login,
        auth::check_session,
        capture::current_state,
        capture::camera_started,
        capture::camera_failed,
        capture::camera_stopped,
        capture::capture_and_analyze,
        capture::reset_view,
        capture::dismiss_error,
    ]
}
