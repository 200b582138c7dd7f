//! HTTP client for the detection service.

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::DetectError;
use crate::types::{DetectImageArgs, DetectTextArgs, DetectionResult, StatsSnapshot};

/// Detection endpoints as seen by the controller.
///
/// Browser futures are not `Send`, so neither are these.
#[allow(async_fn_in_trait)]
pub trait DetectionApi {
    async fn detect_text(&self, text: &str) -> Result<DetectionResult, DetectError>;

    async fn detect_image(&self, data_url: &str) -> Result<DetectionResult, DetectError>;
}

/// `reqwest` backed client. On wasm32 this goes through `fetch`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    text_endpoint: String,
    image_endpoint: String,
    stats_endpoint: String,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            text_endpoint: config.text_endpoint.clone(),
            image_endpoint: config.image_endpoint.clone(),
            stats_endpoint: config.stats_endpoint.clone(),
        }
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<DetectionResult, DetectError> {
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        read_result(response).await
    }

    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, DetectError> {
        debug!("GET {}", self.stats_endpoint);
        let stats = self
            .client
            .get(&self.stats_endpoint)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsSnapshot>()
            .await?;
        Ok(stats)
    }
}

/// Any non-2xx status is a request failure, whatever the body says.
async fn read_result(response: reqwest::Response) -> Result<DetectionResult, DetectError> {
    let status = response.status();
    if !status.is_success() {
        warn!("Detection request failed with {}", status);
    }
    let result = response
        .error_for_status()?
        .json::<DetectionResult>()
        .await?;
    Ok(result)
}

impl DetectionApi for HttpApi {
    async fn detect_text(&self, text: &str) -> Result<DetectionResult, DetectError> {
        self.post_json(&self.text_endpoint, &DetectTextArgs { text }).await
    }

    async fn detect_image(&self, data_url: &str) -> Result<DetectionResult, DetectError> {
        self.post_json(&self.image_endpoint, &DetectImageArgs { image: data_url })
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::types::DetectionKind;
    use futures::executor::block_on;

    fn make_response(status: u16, body: &'static str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
            .into()
    }

    #[test]
    fn test_success_body_decoded() {
        let response = make_response(
            200,
            r#"{"is_ai_generated":true,"confidence_score":0.91,"explanation":"Repetitive phrasing"}"#,
        );
        let result = block_on(read_result(response)).unwrap();
        assert!(result.is_ai_generated);
        assert_eq!(result.confidence_score, 0.91);
        assert_eq!(result.explanation.as_deref(), Some("Repetitive phrasing"));
    }

    #[test]
    fn test_server_error_is_request_failure() {
        let response = make_response(500, r#"{"error":"model unavailable"}"#);
        let err = block_on(read_result(response)).unwrap_err();
        match &err {
            DetectError::Http(inner) => {
                assert_eq!(inner.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert!(!err.is_validation());
        assert_eq!(
            err.user_message(DetectionKind::Text),
            "Error analyzing text. Please try again."
        );
    }

    #[test]
    fn test_client_error_with_result_shaped_body_still_fails() {
        let response = make_response(400, r#"{"is_ai_generated":false,"confidence_score":0.5}"#);
        assert!(matches!(block_on(read_result(response)), Err(DetectError::Http(_))));
    }

    #[test]
    fn test_malformed_success_body_is_request_failure() {
        let response = make_response(200, r#"{"error":"No text provided"}"#);
        let err = block_on(read_result(response)).unwrap_err();
        assert!(matches!(err, DetectError::Http(_)));
        assert_eq!(
            err.user_message(DetectionKind::Image),
            "Error analyzing image. Please try again."
        );
    }
}
