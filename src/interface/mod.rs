pub mod entries;
pub mod prompts;
pub mod render;

pub use entries::{evaluate_entries, evaluate_items, validate_entries, EntryOutcome};
pub use prompts::{
    collect_manual_entries, parse_item_count, parse_portion, prompt_food_name, prompt_item_count,
    prompt_portion, prompt_yes_no,
};
pub use render::{display_breakdown, display_database, display_entry_outcome, display_scan_report};
