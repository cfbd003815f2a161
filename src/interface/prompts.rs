use dialoguer::{Confirm, Input};

use crate::error::{CalorieError, Result};

/// Most food rows a single manual calculation accepts.
pub const MAX_ITEMS: usize = 10;

/// Largest portion the manual prompt accepts.
pub const MAX_PORTION: f64 = 10.0;

/// Prompt for how many food rows to enter. Re-asks until the count is valid.
pub fn prompt_item_count() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt(format!("Number of food items (1-{})", MAX_ITEMS))
        .default("1".to_string())
        .validate_with(|s: &String| parse_item_count(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_item_count(&input)
}

/// Parse an item count typed at the prompt; valid range is 1 to [`MAX_ITEMS`].
pub fn parse_item_count(input: &str) -> Result<usize> {
    let count: usize = input
        .trim()
        .parse()
        .map_err(|_| CalorieError::InvalidInput("Invalid number".to_string()))?;

    if !(1..=MAX_ITEMS).contains(&count) {
        return Err(CalorieError::InvalidInput(format!(
            "Number of food items must be between 1 and {}",
            MAX_ITEMS
        )));
    }

    Ok(count)
}

/// Prompt for the name of food row `index` (1-based). May be empty.
pub fn prompt_food_name(index: usize) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("Food item {}", index))
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for the portion of food row `index` (1-based). Re-asks until the
/// portion is in range.
pub fn prompt_portion(index: usize) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Portion (in units) {}", index))
        .default("1.0".to_string())
        .validate_with(|s: &String| parse_portion(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_portion(&input)
}

/// Parse a portion typed at the prompt; valid range is 0 to [`MAX_PORTION`].
pub fn parse_portion(input: &str) -> Result<f64> {
    let portion: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalorieError::InvalidInput("Invalid number".to_string()))?;

    if !(0.0..=MAX_PORTION).contains(&portion) {
        return Err(CalorieError::InvalidInput(format!(
            "Portion must be between 0 and {}",
            MAX_PORTION
        )));
    }

    Ok(portion)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect food names and portions for a manual calculation.
pub fn collect_manual_entries() -> Result<(Vec<String>, Vec<f64>)> {
    let count = prompt_item_count()?;

    let mut names = Vec::with_capacity(count);
    let mut portions = Vec::with_capacity(count);

    for i in 1..=count {
        names.push(prompt_food_name(i)?);
        portions.push(prompt_portion(i)?);
    }

    Ok((names, portions))
}
