//! Configuration types for test data generation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generators::RecipeGenConfig;

/// Reference categories inserted on every seed run.
pub const DEFAULT_CATEGORIES: [&str; 15] = [
    "Poultry",
    "Beef",
    "Fish",
    "Pork",
    "Vegetables",
    "Sauces",
    "Vegetarian",
    "Pasta",
    "Appetizers",
    "Dessert",
    "Breakfast",
    "Brunch",
    "Salad",
    "Soups",
    "Sandwiches",
];

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: usize,

    /// Number of recipes to generate. Each recipe gets one category.
    pub recipe_count: usize,

    /// Category names, inserted verbatim.
    pub categories: Vec<String>,

    /// Maximum number of inserts in flight at once.
    pub batch_size: usize,

    /// RNG seed for reproducible data. Entropy-seeded when absent.
    pub seed: Option<u64>,

    /// Shape of generated recipe text.
    pub recipe: RecipeGenConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: 5,
            recipe_count: 20,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            batch_size: 50,
            seed: None,
            recipe: RecipeGenConfig::default(),
        }
    }
}

impl SeedConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Category names with repeats removed, first occurrence wins.
    ///
    /// `category.name` is `UNIQUE`; a repeated name would abort the run after
    /// other inserts had already landed.
    pub fn unique_categories(&self) -> Vec<String> {
        let mut seen = HashSet::with_capacity(self.categories.len());
        self.categories
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }
}
