use image::DynamicImage;
use thiserror::Error;

/// Failure reported by an OCR collaborator.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("could not start OCR engine '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("could not prepare image for OCR: {0}")]
    Prepare(String),

    #[error("OCR output is not valid UTF-8")]
    Encoding,

    #[error("{0}")]
    Other(String),
}

/// Text extraction from a decoded image.
pub trait OcrEngine {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

/// Engine that returns canned text (or a canned failure) for any image.
#[derive(Debug, Clone)]
pub struct StaticOcr {
    response: Result<String, String>,
}

impl StaticOcr {
    pub fn with_text(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

impl OcrEngine for StaticOcr {
    fn extract_text(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        self.response.clone().map_err(OcrError::Other)
    }
}
