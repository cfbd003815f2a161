use serde::{Deserialize, Serialize};

/// A food and its calorie value for one unit (portion of 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    #[serde(rename = "calories")]
    pub calories_per_unit: f64,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, calories_per_unit: f64) -> Self {
        Self {
            name: name.into(),
            calories_per_unit,
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Calories must be a non-negative finite number.
    pub fn is_valid(&self) -> bool {
        self.calories_per_unit.is_finite() && self.calories_per_unit >= 0.0
    }

    /// Calories for the given portion.
    #[inline]
    pub fn calories_for(&self, portion: f64) -> f64 {
        self.calories_per_unit * portion
    }
}

impl PartialEq for FoodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodEntry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercase() {
        let entry = FoodEntry::new(" Chicken Breast", 165.0);
        assert_eq!(entry.key(), "chicken breast");
    }

    #[test]
    fn test_calories_for_portion() {
        let entry = FoodEntry::new("rice", 130.0);
        assert!((entry.calories_for(1.5) - 195.0).abs() < 1e-9);
        assert_eq!(entry.calories_for(0.0), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(FoodEntry::new("milk", 42.0).is_valid());
        assert!(!FoodEntry::new("milk", -1.0).is_valid());
        assert!(!FoodEntry::new("milk", f64::NAN).is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        assert_eq!(FoodEntry::new("Egg", 155.0), FoodEntry::new("EGG", 155.0));
    }

    #[test]
    fn test_deserialize_calories_field() {
        let entry: FoodEntry = serde_json::from_str(r#"{"name": "Apple", "calories": 52}"#).unwrap();
        assert_eq!(entry.name, "Apple");
        assert_eq!(entry.calories_per_unit, 52.0);
    }
}
