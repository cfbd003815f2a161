mod persistence;
mod table;

pub use persistence::load_database;
pub use table::FoodDatabase;
