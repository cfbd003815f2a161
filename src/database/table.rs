use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{CalorieError, Result};
use crate::models::FoodEntry;

/// Minimum Jaro-Winkler score for a key to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Builtin calories per unit, in display order.
const BUILTIN_FOODS: [(&str, f64); 10] = [
    ("apple", 52.0),
    ("banana", 89.0),
    ("orange", 47.0),
    ("chicken breast", 165.0),
    ("rice", 130.0),
    ("bread", 265.0),
    ("egg", 155.0),
    ("milk", 42.0),
    ("potato", 77.0),
    ("tomato", 22.0),
];

/// Read-only food table keyed by lowercase name.
///
/// Iteration follows insertion order so scan results and listings are stable.
#[derive(Debug, Clone)]
pub struct FoodDatabase {
    entries: Vec<FoodEntry>,
    index: HashMap<String, usize>,
}

impl FoodDatabase {
    /// The default ten-entry table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_FOODS
            .iter()
            .map(|(name, calories)| FoodEntry::new(*name, *calories))
            .collect();
        Self::index_entries(entries)
    }

    /// Build a table from arbitrary entries.
    ///
    /// Names are stored lowercase. A repeated name (case-insensitive) keeps the
    /// last occurrence's calories at the first occurrence's position.
    pub fn from_entries(foods: Vec<FoodEntry>) -> Result<Self> {
        let mut entries: Vec<FoodEntry> = Vec::with_capacity(foods.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for food in foods {
            if !food.is_valid() {
                return Err(CalorieError::InvalidInput(format!(
                    "Invalid calories for '{}': {}",
                    food.name, food.calories_per_unit
                )));
            }

            let key = food.key();
            if key.is_empty() {
                return Err(CalorieError::InvalidInput(
                    "Food name must not be empty".to_string(),
                ));
            }

            match index.get(&key) {
                Some(&pos) => entries[pos].calories_per_unit = food.calories_per_unit,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(FoodEntry::new(key, food.calories_per_unit));
                }
            }
        }

        Ok(Self { entries, index })
    }

    fn index_entries(entries: Vec<FoodEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key(), i))
            .collect();
        Self { entries, index }
    }

    /// Calories per unit for a food (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.database_entry(name).map(|e| e.calories_per_unit)
    }

    /// Full entry for a food (case-insensitive).
    pub fn database_entry(&self, name: &str) -> Option<&FoodEntry> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Lowercase keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Keys that look like `name`, best match first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&str> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(&str, f64)> = self
            .keys()
            .map(|k| (k, jaro_winkler(k, &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates.into_iter().take(limit).map(|(k, _)| k).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
