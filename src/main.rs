use std::path::Path;

use clap::Parser;
use tracing::info;

use calorie_calc::cli::{Cli, Command};
use calorie_calc::database::{load_database, FoodDatabase};
use calorie_calc::error::Result;
use calorie_calc::interface::{
    collect_manual_entries, display_database, display_entry_outcome, display_scan_report,
    evaluate_entries, evaluate_items, prompt_yes_no,
};
use calorie_calc::logging::init_logger;
use calorie_calc::scanner::{load_image, scan_image, TesseractOcr};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let db = match &cli.database {
        Some(path) => load_database(path)?,
        None => FoodDatabase::builtin(),
    };
    info!(foods = db.len(), "food database ready");

    match cli.command.unwrap_or_default() {
        Command::Calculate { items } if items.is_empty() => cmd_calculate_interactive(&db),
        Command::Calculate { items } => cmd_calculate(&db, &items),
        Command::Scan {
            image,
            tesseract,
            lang,
        } => cmd_scan(&db, &image, TesseractOcr::new(tesseract, lang)),
        Command::Foods => {
            display_database(&db);
            Ok(())
        }
    }
}

/// Calculate calories for `name=portion` arguments.
fn cmd_calculate(db: &FoodDatabase, items: &[String]) -> Result<()> {
    let outcome = evaluate_items(db, items)?;
    display_entry_outcome(db, &outcome);
    Ok(())
}

/// Prompt for entries until the user stops.
fn cmd_calculate_interactive(db: &FoodDatabase) -> Result<()> {
    println!("Food Calorie Calculator");
    println!();

    loop {
        let (names, portions) = collect_manual_entries()?;
        let outcome = evaluate_entries(db, &names, &portions)?;
        display_entry_outcome(db, &outcome);

        if !prompt_yes_no("Calculate another meal?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Scan an image file for food names.
fn cmd_scan(db: &FoodDatabase, image_path: &Path, ocr: TesseractOcr) -> Result<()> {
    let image = load_image(image_path)?;
    println!(
        "Scanning {} ({}x{})...",
        image_path.display(),
        image.width(),
        image.height()
    );

    let report = scan_image(db, &ocr, &image);
    display_scan_report(db, &report);
    Ok(())
}
