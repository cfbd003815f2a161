use tracing::debug;

use crate::database::FoodDatabase;
use crate::error::{CalorieError, Result};
use crate::models::{Calculation, LineItem};

/// Total the calories for paired food names and portions.
///
/// Names are looked up case-insensitively. A name missing from the database
/// adds nothing to the total or the breakdown and is listed in
/// `Calculation::unmatched` instead. Portions must be non-negative; there is
/// no upper bound here.
pub fn calculate_calories<S: AsRef<str>>(
    db: &FoodDatabase,
    names: &[S],
    portions: &[f64],
) -> Result<Calculation> {
    if names.len() != portions.len() {
        return Err(CalorieError::InvalidInput(format!(
            "Got {} food names but {} portions",
            names.len(),
            portions.len()
        )));
    }

    if let Some(bad) = portions.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(CalorieError::InvalidInput(format!(
            "Portion must be a non-negative number, got {}",
            bad
        )));
    }

    let mut calculation = Calculation::default();

    for (name, &portion) in names.iter().zip(portions) {
        let name = name.as_ref();
        match db.database_entry(name) {
            Some(entry) => {
                let calories = entry.calories_for(portion);
                calculation.total += calories;
                calculation
                    .breakdown
                    .push(LineItem::new(name.to_string(), portion, calories));
            }
            None => {
                debug!(food = name, "no database entry, skipping");
                calculation.unmatched.push(name.to_string());
            }
        }
    }

    Ok(calculation)
}
