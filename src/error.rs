use thiserror::Error;

use crate::types::DetectionKind;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Please enter some text to analyze")]
    EmptyText,

    #[error("Please select an image to analyze")]
    NoFileSelected,

    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("File read error: {0}")]
    FileRead(String),
}

impl DetectError {
    /// Validation failures are raised before any request is issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, DetectError::EmptyText | DetectError::NoFileSelected)
    }

    /// Message shown in the blocking alert.
    pub fn user_message(&self, kind: DetectionKind) -> String {
        if self.is_validation() {
            return self.to_string();
        }
        match kind {
            DetectionKind::Text => "Error analyzing text. Please try again.".to_string(),
            DetectionKind::Image => "Error analyzing image. Please try again.".to_string(),
        }
    }
}

impl From<DetectError> for String {
    fn from(err: DetectError) -> Self {
        err.to_string()
    }
}
