//! Entity generators for test data.
//!
//! - [`UserGenerator`]: Generate users with unique usernames
//! - [`RecipeGenerator`]: Generate lorem recipes owned by existing users

pub mod recipe;
pub mod user;

pub use recipe::{GeneratedRecipe, RecipeGenConfig, RecipeGenerator};
pub use user::{GeneratedUser, UserGenerator};
