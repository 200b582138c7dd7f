//! Submission flows, independent of the DOM.
//!
//! Components call these inside `spawn_local` and then fold the outcome into
//! `UiState` with [`complete_submission`].

use std::future::Future;

use tracing::{error, info};

use crate::api::DetectionApi;
use crate::error::DetectError;
use crate::format::{render_result, ResultView};
use crate::state::UiState;
use crate::types::{DetectionKind, DetectionResult};

pub const BUSY_LABEL: &str = "Analyzing...";

/// Label of a submit control while idle or busy.
pub fn submit_label(kind: DetectionKind, busy: bool) -> &'static str {
    match (kind, busy) {
        (_, true) => BUSY_LABEL,
        (DetectionKind::Text, false) => "Analyze Text",
        (DetectionKind::Image, false) => "Analyze Image",
    }
}

/// Trimmed text, or `EmptyText` for blank input.
pub fn validate_text(raw: &str) -> Result<&str, DetectError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DetectError::EmptyText);
    }
    Ok(text)
}

pub fn require_selection<T>(selected: Option<T>) -> Result<T, DetectError> {
    selected.ok_or(DetectError::NoFileSelected)
}

pub async fn submit_text<A: DetectionApi>(
    api: &A,
    raw: &str,
) -> Result<DetectionResult, DetectError> {
    let text = validate_text(raw)?;
    info!("Submitting text for detection ({} chars)", text.chars().count());
    api.detect_text(text).await
}

/// Read the selected file as a data URL, then submit it.
pub async fn submit_image<A, F, R, Fut>(
    api: &A,
    selected: Option<F>,
    read: R,
) -> Result<DetectionResult, DetectError>
where
    A: DetectionApi,
    R: FnOnce(F) -> Fut,
    Fut: Future<Output = Result<String, DetectError>>,
{
    let file = require_selection(selected)?;
    let data_url = read(file).await?;
    info!("Submitting image for detection ({} bytes encoded)", data_url.len());
    api.detect_image(&data_url).await
}

/// Fold a successful response into the session and produce the card to show.
pub fn complete_submission(
    state: &mut UiState,
    result: &DetectionResult,
    kind: DetectionKind,
) -> ResultView {
    state.record_analysis(result);
    render_result(result, kind)
}

/// Log a request failure and return the alert text.
pub fn failure_message(err: &DetectError, kind: DetectionKind) -> String {
    if !err.is_validation() {
        error!("Error analyzing {}: {}", kind.as_str(), err);
    }
    err.user_message(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every call and replies with a fixed outcome.
    struct MockApi {
        reply: Option<DetectionResult>,
        calls: RefCell<Vec<(DetectionKind, String)>>,
    }

    impl MockApi {
        fn replying(result: DetectionResult) -> Self {
            Self {
                reply: Some(result),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn outcome(&self) -> Result<DetectionResult, DetectError> {
            self.reply
                .clone()
                .ok_or_else(|| DetectError::FileRead("connection refused".to_string()))
        }
    }

    impl DetectionApi for MockApi {
        async fn detect_text(&self, text: &str) -> Result<DetectionResult, DetectError> {
            self.calls.borrow_mut().push((DetectionKind::Text, text.to_string()));
            self.outcome()
        }

        async fn detect_image(&self, data_url: &str) -> Result<DetectionResult, DetectError> {
            self.calls.borrow_mut().push((DetectionKind::Image, data_url.to_string()));
            self.outcome()
        }
    }

    async fn read_ok(name: &'static str) -> Result<String, DetectError> {
        Ok(format!("data:image/png;base64,{}", name))
    }

    #[test]
    fn test_blank_text_never_requests() {
        let api = MockApi::replying(DetectionResult::new(false, 0.5));
        for raw in ["", "   ", "\n\t "] {
            let err = block_on(submit_text(&api, raw)).unwrap_err();
            assert!(matches!(err, DetectError::EmptyText));
            assert_eq!(err.user_message(DetectionKind::Text), "Please enter some text to analyze");
        }
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_text_is_trimmed_before_sending() {
        let api = MockApi::replying(DetectionResult::new(false, 0.5));
        block_on(submit_text(&api, "  Hello world \n")).unwrap();
        assert_eq!(
            api.calls.borrow().as_slice(),
            &[(DetectionKind::Text, "Hello world".to_string())]
        );
    }

    #[test]
    fn test_hello_world_scenario() {
        let api = MockApi::replying(DetectionResult::new(false, 0.87));
        let mut state = UiState::default();
        assert_eq!(state.analysis_count, 0);

        let result = block_on(submit_text(&api, "Hello world")).unwrap();
        let view = complete_submission(&mut state, &result, DetectionKind::Text);

        assert_eq!(view.label, "Human-Written Content");
        assert_eq!(view.confidence, "Confidence: 87.0%");
        assert_eq!(state.analysis_count, 1);
    }

    #[test]
    fn test_no_file_never_requests() {
        let api = MockApi::replying(DetectionResult::new(true, 0.7));
        let err = block_on(submit_image(&api, None::<&str>, read_ok)).unwrap_err();
        assert!(matches!(err, DetectError::NoFileSelected));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_image_sends_data_url() {
        let api = MockApi::replying(DetectionResult::new(true, 0.7));
        let result = block_on(submit_image(&api, Some("AAAA"), read_ok)).unwrap();
        assert!(result.is_ai_generated);
        assert_eq!(
            api.calls.borrow().as_slice(),
            &[(DetectionKind::Image, "data:image/png;base64,AAAA".to_string())]
        );
    }

    #[test]
    fn test_read_failure_skips_request() {
        let api = MockApi::replying(DetectionResult::new(true, 0.7));
        let err = block_on(submit_image(&api, Some("x"), |_: &str| async {
            Err::<String, _>(DetectError::FileRead("NotReadableError".to_string()))
        }))
        .unwrap_err();
        assert!(!err.is_validation());
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_request_failure_leaves_counter() {
        let api = MockApi::failing();
        let state = UiState::default();
        let err = block_on(submit_text(&api, "Hello world")).unwrap_err();
        assert_eq!(
            failure_message(&err, DetectionKind::Text),
            "Error analyzing text. Please try again."
        );
        assert_eq!(state.analysis_count, 0);
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[test]
    fn test_submit_labels() {
        assert_eq!(submit_label(DetectionKind::Text, false), "Analyze Text");
        assert_eq!(submit_label(DetectionKind::Image, false), "Analyze Image");
        assert_eq!(submit_label(DetectionKind::Text, true), "Analyzing...");
    }
}
