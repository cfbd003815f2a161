use assert_float_eq::assert_float_absolute_eq;

use calorie_calc::calculator::calculate_calories;
use calorie_calc::database::FoodDatabase;
use calorie_calc::models::FoodEntry;

#[test]
fn test_known_food_times_portion() {
    let db = FoodDatabase::builtin();

    for entry in db.entries() {
        for portion in [0.0, 0.5, 1.0, 2.3, 10.0] {
            let calc = calculate_calories(&db, &[entry.name.as_str()], &[portion]).unwrap();
            let expected = entry.calories_per_unit * portion;

            assert_float_absolute_eq!(calc.total, expected, 1e-9);
            assert_eq!(calc.breakdown.len(), 1);
            assert_float_absolute_eq!(calc.breakdown[0].calories, expected, 1e-9);
            assert_float_absolute_eq!(calc.breakdown[0].portion, portion, 1e-12);
        }
    }
}

#[test]
fn test_lookup_is_case_insensitive() {
    let db = FoodDatabase::builtin();

    let upper = calculate_calories(&db, &["APPLE"], &[1.0]).unwrap();
    let lower = calculate_calories(&db, &["apple"], &[1.0]).unwrap();

    assert_float_absolute_eq!(upper.total, 52.0, 1e-9);
    assert_float_absolute_eq!(upper.total, lower.total, 1e-9);
    assert_eq!(upper.breakdown[0].food, "APPLE");
    assert_eq!(lower.breakdown[0].food, "apple");
}

#[test]
fn test_unmatched_food_is_excluded() {
    let db = FoodDatabase::builtin();
    let calc = calculate_calories(&db, &["unicorn"], &[2.0]).unwrap();

    assert_eq!(calc.total, 0.0);
    assert!(calc.breakdown.is_empty());
    assert_eq!(calc.unmatched, vec!["unicorn".to_string()]);
}

#[test]
fn test_multiple_items_accumulate() {
    let db = FoodDatabase::builtin();
    let calc = calculate_calories(&db, &["apple", "banana"], &[1.0, 1.0]).unwrap();

    assert_float_absolute_eq!(calc.total, 141.0, 1e-9);
    assert_eq!(calc.breakdown.len(), 2);
    assert_eq!(calc.breakdown[0].food, "apple");
    assert_eq!(calc.breakdown[1].food, "banana");
}

#[test]
fn test_mixed_known_and_unknown_keeps_order() {
    let db = FoodDatabase::builtin();
    let names = vec![
        "Rice".to_string(),
        "dragonfruit".to_string(),
        "egg".to_string(),
        "kale".to_string(),
    ];
    let calc = calculate_calories(&db, &names, &[1.5, 1.0, 2.0, 3.0]).unwrap();

    assert_float_absolute_eq!(calc.total, 130.0 * 1.5 + 155.0 * 2.0, 1e-9);
    let foods: Vec<&str> = calc.breakdown.iter().map(|i| i.food.as_str()).collect();
    assert_eq!(foods, vec!["Rice", "egg"]);
    assert_eq!(calc.unmatched, vec!["dragonfruit", "kale"]);
}

#[test]
fn test_substituted_database() {
    let db = FoodDatabase::from_entries(vec![
        FoodEntry::new("Apple", 100.0),
        FoodEntry::new("Oats", 389.0),
    ])
    .unwrap();

    let calc = calculate_calories(&db, &["apple", "banana", "oats"], &[1.0, 1.0, 0.5]).unwrap();

    assert_float_absolute_eq!(calc.total, 100.0 + 194.5, 1e-9);
    assert_eq!(calc.unmatched, vec!["banana"]);
}

#[test]
fn test_portion_above_ui_bound_is_accepted() {
    let db = FoodDatabase::builtin();
    let calc = calculate_calories(&db, &["milk"], &[25.0]).unwrap();
    assert_float_absolute_eq!(calc.total, 1050.0, 1e-9);
}
