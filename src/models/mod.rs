pub mod calculation;
pub mod food;

pub use calculation::{Calculation, LineItem, ScanReport};
pub use food::FoodEntry;
