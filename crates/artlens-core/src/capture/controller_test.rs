mod tests {
    use crate::art_info::ArtInfo;
    use crate::capture::controller::CaptureController;
    use crate::capture::state::{CaptureState, CapturedImage};
    use crate::error::QueryError;

    fn frame(tag: &str) -> CapturedImage {
        CapturedImage::jpeg(format!("base64-{tag}"))
    }

    fn starry_night() -> ArtInfo {
        ArtInfo {
            title: "Starry Night".to_string(),
            artist: "Vincent van Gogh".to_string(),
            year: "1889".to_string(),
            description: "A swirling night sky over Saint-Remy.".to_string(),
            historical_context: "Post-Impressionism.".to_string(),
        }
    }

    /// Drives a controller through camera start and capture, returning the
    /// token of the in-flight analysis.
    fn analyzing_controller(tag: &str) -> (CaptureController, crate::capture::QueryToken) {
        let mut controller = CaptureController::new();
        controller.camera_started();
        assert!(controller.capture_frame(frame(tag)));
        let token = controller.begin_analysis().expect("analysis should start");
        (controller, token)
    }

    #[test]
    fn test_starts_idle_and_opens_camera() {
        let mut controller = CaptureController::new();
        assert_eq!(*controller.state(), CaptureState::Idle);

        controller.camera_started();
        assert_eq!(*controller.state(), CaptureState::CameraActive);

        // A repeated start report is idempotent.
        controller.camera_started();
        assert_eq!(*controller.state(), CaptureState::CameraActive);
    }

    #[test]
    fn test_camera_denied_keeps_idle_and_never_fails_the_view() {
        let mut controller = CaptureController::new();
        let err = controller.camera_denied();

        assert!(!err.to_string().is_empty());
        assert_eq!(*controller.state(), CaptureState::Idle);
    }

    #[test]
    fn test_capture_requires_live_camera() {
        let mut controller = CaptureController::new();
        assert!(!controller.capture_frame(frame("early")));
        assert_eq!(*controller.state(), CaptureState::Idle);
        assert!(controller.begin_analysis().is_none());
    }

    #[test]
    fn test_successful_query_lands_in_result_ready() {
        let (mut controller, token) = analyzing_controller("starry");

        assert!(controller.complete(token, Ok(starry_night())));

        let CaptureState::ResultReady { image, info } = controller.state() else {
            panic!("expected ResultReady, got {:?}", controller.state());
        };
        assert_eq!(*info, starry_night());
        // The captured still is retained for the result overlay.
        assert_eq!(*image, frame("starry"));
    }

    #[test]
    fn test_failed_query_carries_user_facing_message() {
        let (mut controller, token) = analyzing_controller("fault");
        let err = QueryError::ServiceNotEnabled {
            activation_url: "https://example.com/enable".to_string(),
        };

        assert!(controller.complete(token, Err(err)));

        let CaptureState::Failed { message, .. } = controller.state() else {
            panic!("expected Failed, got {:?}", controller.state());
        };
        assert!(message.contains("https://example.com/enable"));
    }

    #[test]
    fn test_second_capture_while_analyzing_is_a_no_op() {
        let (mut controller, token) = analyzing_controller("first");

        assert!(!controller.capture_frame(frame("second")));
        assert!(controller.begin_analysis().is_none());

        // The original frame and request are untouched.
        assert_eq!(controller.state().captured_image(), Some(&frame("first")));
        assert!(controller.complete(token, Ok(starry_night())));
    }

    #[test]
    fn test_stopping_camera_mid_query_drops_the_late_result() {
        let (mut controller, token) = analyzing_controller("stale");

        controller.camera_stopped();
        assert_eq!(*controller.state(), CaptureState::Idle);

        // The response arrives after the user navigated away.
        assert!(!controller.complete(token, Ok(starry_night())));
        assert_eq!(*controller.state(), CaptureState::Idle);
    }

    #[test]
    fn test_token_from_a_superseded_request_is_stale() {
        let (mut controller, first) = analyzing_controller("one");
        controller.camera_stopped();

        controller.camera_started();
        assert!(controller.capture_frame(frame("two")));
        let second = controller.begin_analysis().unwrap();

        assert!(!controller.complete(first, Err(QueryError::Unknown)));
        assert!(controller.complete(second, Ok(starry_night())));
    }

    #[test]
    fn test_reset_returns_to_live_camera() {
        let (mut controller, token) = analyzing_controller("done");
        controller.complete(token, Ok(starry_night()));

        assert!(controller.reset());
        assert_eq!(*controller.state(), CaptureState::CameraActive);
        assert_eq!(controller.state().captured_image(), None);
    }

    #[test]
    fn test_dismiss_only_applies_to_failures() {
        let (mut controller, token) = analyzing_controller("oops");
        controller.complete(token, Err(QueryError::Unknown));

        assert!(controller.dismiss());
        assert_eq!(*controller.state(), CaptureState::Idle);

        // Nothing to dismiss from idle.
        assert!(!controller.dismiss());
    }

    #[test]
    fn test_stop_clears_result_and_image() {
        let (mut controller, token) = analyzing_controller("view");
        controller.complete(token, Ok(starry_night()));

        controller.camera_stopped();
        assert_eq!(*controller.state(), CaptureState::Idle);
        assert_eq!(controller.state().captured_image(), None);
    }
}
