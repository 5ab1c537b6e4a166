pub mod database;
pub mod errors;
pub mod models;
pub mod schema;

pub use database::{Database, TableCounts};
pub use errors::RecipeError;
