pub mod calculator;
pub mod cli;
pub mod database;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod scanner;

pub use calculator::calculate_calories;
pub use database::FoodDatabase;
pub use error::{CalorieError, Result};
pub use models::{Calculation, FoodEntry, LineItem, ScanReport};
pub use scanner::{scan_image, OcrEngine};
