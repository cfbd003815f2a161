use serde::Serialize;

/// One row of a calculation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    /// Food name as the user entered it.
    pub food: String,

    /// Portion multiplier.
    pub portion: f64,

    /// Calories for this row (calories per unit × portion).
    pub calories: f64,
}

impl LineItem {
    pub fn new(food: String, portion: f64, calories: f64) -> Self {
        Self {
            food,
            portion,
            calories,
        }
    }
}

/// Result of a manual calorie calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Calculation {
    pub total: f64,

    /// Matched rows in input order.
    pub breakdown: Vec<LineItem>,

    /// Names that were not found in the database, in input order.
    /// They contribute nothing to `total`.
    pub unmatched: Vec<String>,
}

impl Calculation {
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }

    pub fn has_unmatched(&self) -> bool {
        !self.unmatched.is_empty()
    }
}

/// Outcome of scanning an image for food names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    /// Matched database keys in database order.
    pub found: Vec<String>,

    /// User-facing message when text extraction failed.
    pub error: Option<String>,
}

impl ScanReport {
    pub fn found(found: Vec<String>) -> Self {
        Self { found, error: None }
    }

    pub fn failed(message: String) -> Self {
        Self {
            found: Vec::new(),
            error: Some(message),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
