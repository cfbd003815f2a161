use std::process::Command;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::scanner::engine::{OcrEngine, OcrError};

/// OCR through the `tesseract` command-line program.
///
/// The image is written to a temporary PNG which is removed when the call
/// returns.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    program: String,
    lang: String,
}

impl TesseractOcr {
    pub fn new(program: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            lang: lang.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrEngine for TesseractOcr {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let input = tempfile::Builder::new()
            .prefix("calorie_calc_")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Prepare(e.to_string()))?;

        image
            .save_with_format(input.path(), ImageFormat::Png)
            .map_err(|e| OcrError::Prepare(e.to_string()))?;

        debug!(program = %self.program, lang = %self.lang, "running ocr");

        let output = Command::new(&self.program)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .output()
            .map_err(|source| OcrError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| OcrError::Encoding)
    }
}
