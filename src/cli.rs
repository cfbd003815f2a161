use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{CalorieError, Result};

/// Calorie Calc — estimate calories from typed food entries or a scanned image.
#[derive(Parser, Debug)]
#[command(name = "calorie_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load the food table from a JSON or CSV file instead of the builtin one.
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate calories for food entries (prompts when none are given).
    Calculate {
        /// Entries as `name=portion`; the portion defaults to 1.
        items: Vec<String>,
    },

    /// Scan an image for food names using OCR.
    Scan {
        /// Image to scan (jpg, jpeg or png).
        image: PathBuf,

        /// Tesseract executable to run.
        #[arg(long, default_value = "tesseract")]
        tesseract: String,

        /// Tesseract language code.
        #[arg(long, default_value = "eng")]
        lang: String,
    },

    /// List the foods in the database.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate { items: Vec::new() }
    }
}

/// Split a `name=portion` argument. A missing portion means one unit.
pub fn parse_item(raw: &str) -> Result<(String, f64)> {
    match raw.rsplit_once('=') {
        Some((name, portion)) => {
            let portion: f64 = portion.trim().parse().map_err(|_| {
                CalorieError::InvalidInput(format!("Invalid portion in '{}'", raw))
            })?;
            Ok((name.trim().to_string(), portion))
        }
        None => Ok((raw.trim().to_string(), 1.0)),
    }
}
