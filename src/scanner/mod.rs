//! Food detection in images.
//!
//! Text extraction is delegated to an [`OcrEngine`]; this module only decides
//! which database foods appear in the recognized text.

mod engine;
mod tesseract;

use std::path::Path;

use image::DynamicImage;
use tracing::{debug, warn};

use crate::database::FoodDatabase;
use crate::error::{CalorieError, Result};
use crate::models::ScanReport;

pub use engine::{OcrEngine, OcrError, StaticOcr};
pub use tesseract::TesseractOcr;

/// Image types accepted for scanning.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Database keys contained in `text`, in database order.
pub fn find_foods(db: &FoodDatabase, text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    db.keys()
        .filter(|key| haystack.contains(key))
        .map(str::to_string)
        .collect()
}

/// Extract text from `image` and match it against the database.
///
/// OCR failures never propagate: the report carries the message and an empty
/// match list.
pub fn scan_image(db: &FoodDatabase, engine: &dyn OcrEngine, image: &DynamicImage) -> ScanReport {
    match engine.extract_text(image) {
        Ok(text) => {
            debug!(chars = text.len(), "ocr finished");
            ScanReport::found(find_foods(db, &text))
        }
        Err(e) => {
            warn!(error = %e, "ocr failed");
            ScanReport::failed(format!("Error processing image: {}", e))
        }
    }
}

/// Decode an uploaded image file.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CalorieError::InvalidInput(format!(
            "Unsupported image type '{}', expected one of: {}",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }

    Ok(image::open(path)?)
}
