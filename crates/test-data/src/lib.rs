//! Test data generation for the recipe box.
//!
//! This crate resets the recipe schema and fills it with reference categories,
//! generated users and lorem recipes, for manual verification and integration
//! testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let summary = Seeder::new(pool)
//!     .with_seed(12345)
//!     .run()
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub use recipes::models::{Category, Recipe, RecipeCategory, User};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DEFAULT_CATEGORIES, SeedConfig};
    pub use crate::db::{SeedError, SeedSummary, Seeder, seed, seed_with_config};
    pub use crate::generators::{RecipeGenConfig, RecipeGenerator, UserGenerator};
    pub use crate::{Category, Recipe, RecipeCategory, User};
}
