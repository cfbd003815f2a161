use crate::database::FoodDatabase;
use crate::interface::entries::EntryOutcome;
use crate::models::{Calculation, ScanReport};

/// How many "did you mean" names to show per unmatched food.
const MAX_SUGGESTIONS: usize = 3;

/// Display a calculation as a table followed by the total.
pub fn display_breakdown(db: &FoodDatabase, calculation: &Calculation) {
    println!();
    println!("=== Results ===");
    println!();

    if calculation.is_empty() {
        println!("No recognized food items entered.");
    } else {
        let width = calculation
            .breakdown
            .iter()
            .map(|i| i.food.len())
            .chain(std::iter::once("Food".len()))
            .max()
            .unwrap_or(4);

        println!("{:<width$}  {:>7}  {:>9}", "Food", "Portion", "Calories", width = width);
        println!("{}", "-".repeat(width + 20));
        for item in &calculation.breakdown {
            println!(
                "{:<width$}  {:>7.1}  {:>9.1}",
                item.food,
                item.portion,
                item.calories,
                width = width
            );
        }
    }

    if calculation.has_unmatched() {
        println!();
        println!("Warning: not in the food database (not counted):");
        for name in &calculation.unmatched {
            let suggestions = db.suggest(name, MAX_SUGGESTIONS);
            if suggestions.is_empty() {
                println!("  - {}", name);
            } else {
                println!("  - {} (did you mean: {}?)", name, suggestions.join(", "));
            }
        }
    }

    println!();
    println!("Total Calories: {:.1}", calculation.total);
    println!();
}

/// Display a calculation, or the reason the entries were not calculated.
pub fn display_entry_outcome(db: &FoodDatabase, outcome: &EntryOutcome) {
    match outcome {
        EntryOutcome::Calculated(calculation) => display_breakdown(db, calculation),
        EntryOutcome::Rejected(message) => println!("{}", message),
    }
}

/// Display the outcome of an image scan.
pub fn display_scan_report(db: &FoodDatabase, report: &ScanReport) {
    if let Some(message) = &report.error {
        eprintln!("{}", message);
    }

    if report.found.is_empty() {
        println!("No recognized food items found in the image");
        return;
    }

    println!("Found the following food items:");
    for item in &report.found {
        match db.lookup(item) {
            Some(calories) => println!("- {} ({} calories per unit)", item, calories),
            None => println!("- {}", item),
        }
    }
}

/// Display every food in the database.
pub fn display_database(db: &FoodDatabase) {
    if db.is_empty() {
        println!("Food database: (none)");
        return;
    }

    println!();
    println!("=== Food Database ({} items) ===", db.len());
    println!();

    let width = db.keys().map(str::len).max().unwrap_or(10);
    for entry in db.entries() {
        println!(
            "  {:<width$} - {} cal per unit",
            entry.name,
            entry.calories_per_unit,
            width = width
        );
    }

    println!();
}
