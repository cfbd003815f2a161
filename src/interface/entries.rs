use crate::calculator::calculate_calories;
use crate::cli::parse_item;
use crate::database::FoodDatabase;
use crate::error::{CalorieError, Result};
use crate::models::Calculation;

/// Shown when any food name was left blank.
pub const MISSING_FOOD_MESSAGE: &str = "Please enter all food items";

/// What to show for one set of manual entries.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Calculated(Calculation),

    /// The entries were not usable; the message is shown instead of a result.
    Rejected(String),
}

/// True when every food name has some text.
pub fn validate_entries<S: AsRef<str>>(names: &[S]) -> bool {
    names.iter().all(|n| !n.as_ref().trim().is_empty())
}

/// Calculate entered foods, turning bad input into a message.
///
/// Only non-input failures are returned as `Err`.
pub fn evaluate_entries<S: AsRef<str>>(
    db: &FoodDatabase,
    names: &[S],
    portions: &[f64],
) -> Result<EntryOutcome> {
    if !validate_entries(names) {
        return Ok(EntryOutcome::Rejected(MISSING_FOOD_MESSAGE.to_string()));
    }

    reject_invalid_input(calculate_calories(db, names, portions).map(EntryOutcome::Calculated))
}

/// Parse `name=portion` arguments and calculate them.
pub fn evaluate_items(db: &FoodDatabase, items: &[String]) -> Result<EntryOutcome> {
    let parsed: Result<Vec<(String, f64)>> = items.iter().map(|raw| parse_item(raw)).collect();
    let (names, portions): (Vec<String>, Vec<f64>) = match parsed {
        Ok(pairs) => pairs.into_iter().unzip(),
        Err(e) => return reject_invalid_input(Err(e)),
    };

    evaluate_entries(db, &names, &portions)
}

fn reject_invalid_input(result: Result<EntryOutcome>) -> Result<EntryOutcome> {
    match result {
        Err(CalorieError::InvalidInput(message)) => Ok(EntryOutcome::Rejected(message)),
        other => other,
    }
}
