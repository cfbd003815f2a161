use std::fs;
use std::path::Path;

use tracing::debug;

use crate::database::FoodDatabase;
use crate::error::Result;
use crate::models::FoodEntry;

/// Load a food table from a file.
///
/// `.csv` files need a `name,calories` header; anything else is read as a
/// JSON array of `{"name": ..., "calories": ...}` objects.
pub fn load_database<P: AsRef<Path>>(path: P) -> Result<FoodDatabase> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let foods = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };

    debug!(path = %path.display(), count = foods.len(), "loaded food table");
    FoodDatabase::from_entries(foods)
}

fn load_json(path: &Path) -> Result<Vec<FoodEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_csv(path: &Path) -> Result<Vec<FoodEntry>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut foods = Vec::new();
    for record in rdr.deserialize() {
        let food: FoodEntry = record?;
        foods.push(food);
    }
    Ok(foods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"[{"name": "Apple", "calories": 52}, {"name": "Kiwi", "calories": 61}]"#,
        );

        let db = load_database(file.path()).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.lookup("kiwi"), Some(61.0));
    }

    #[test]
    fn test_load_csv() {
        let file = write_temp(".csv", "name,calories\nApple, 52\nChicken Breast,165\n");

        let db = load_database(file.path()).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.lookup("chicken breast"), Some(165.0));
    }

    #[test]
    fn test_csv_and_json_agree() {
        let json = write_temp(".json", r#"[{"name": "Rice", "calories": 130.5}]"#);
        let csv = write_temp(".CSV", "name,calories\nRice,130.5\n");

        let a = load_database(json.path()).unwrap();
        let b = load_database(csv.path()).unwrap();
        let pairs = |db: &FoodDatabase| -> Vec<(String, f64)> {
            db.entries()
                .iter()
                .map(|e| (e.name.clone(), e.calories_per_unit))
                .collect()
        };
        assert_eq!(pairs(&a), vec![("rice".to_string(), 130.5)]);
        assert_eq!(pairs(&a), pairs(&b));
    }

    #[test]
    fn test_load_json_malformed() {
        let file = write_temp(".json", "{not json");
        assert!(load_database(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_database("/nonexistent/foods.json").is_err());
    }
}
