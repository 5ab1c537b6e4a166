//! Recipe generation with lorem text.

use fake::{
    Fake,
    faker::lorem::en::{Paragraphs, Sentence},
};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use recipes::models::NewRecipe;

/// Longest title the `recipe.title` column accepts.
const MAX_TITLE_CHARS: usize = 255;

/// Generated recipe ready for database insertion, with its one category.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub recipe: NewRecipe,
    pub category_id: i32,
}

/// Configuration for recipe generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeGenConfig {
    /// Word count range for titles (min inclusive, max exclusive).
    pub title_words: (usize, usize),
    /// Number of lorem paragraphs in the ingredients list.
    pub ingredient_paragraphs: usize,
    /// Number of lorem paragraphs in the instructions list.
    pub instruction_paragraphs: usize,
}

impl Default for RecipeGenConfig {
    fn default() -> Self {
        Self {
            title_words: (4, 10),
            ingredient_paragraphs: 3,
            instruction_paragraphs: 5,
        }
    }
}

/// Generates recipes owned by existing users.
pub struct RecipeGenerator {
    config: RecipeGenConfig,
}

impl RecipeGenerator {
    /// Creates a new recipe generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: RecipeGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: RecipeGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single recipe for the given owner and category.
    pub fn generate(&self, user_id: i32, category_id: i32, rng: &mut impl Rng) -> GeneratedRecipe {
        let (min_words, max_words) = self.config.title_words;
        let min_words = min_words.max(1);
        let max_words = max_words.max(min_words + 1);

        let title: String = Sentence(min_words..max_words).fake_with_rng(rng);
        let title = title.chars().take(MAX_TITLE_CHARS).collect();

        GeneratedRecipe {
            recipe: NewRecipe {
                title,
                ingredients: self.paragraphs(self.config.ingredient_paragraphs, rng),
                instructions: self.paragraphs(self.config.instruction_paragraphs, rng),
                user_id,
            },
            category_id,
        }
    }

    /// Generates recipes, each with an owner and a category picked uniformly
    /// from the given ids.
    ///
    /// Returns no recipes when either id list is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        user_ids: &[i32],
        category_ids: &[i32],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedRecipe> {
        let mut recipes = Vec::with_capacity(count);

        for _ in 0..count {
            let (Some(&user_id), Some(&category_id)) =
                (user_ids.choose(rng), category_ids.choose(rng))
            else {
                return Vec::new();
            };
            recipes.push(self.generate(user_id, category_id, rng));
        }

        recipes
    }

    fn paragraphs(&self, count: usize, rng: &mut impl Rng) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }
        Paragraphs(count..count + 1).fake_with_rng(rng)
    }
}

impl Default for RecipeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
