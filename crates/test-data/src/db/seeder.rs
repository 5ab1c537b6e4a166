//! Database seeding utilities.

use std::time::{Duration, Instant};

use rand::{SeedableRng, rngs::StdRng};
use recipes::models::{NewCategory, NewUser, RecipeCategory};
use recipes::{Database, RecipeError, schema};
use sqlx::PgPool;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::config::SeedConfig;
use crate::generators::{GeneratedRecipe, GeneratedUser, RecipeGenerator, UserGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Recipes(#[from] RecipeError),
    #[error("Insert task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("Recipes requested but no users were seeded")]
    NoUsers,
    #[error("Recipes requested but no categories were seeded")]
    NoCategories,
}

/// Ids of everything a seed run inserted.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub category_ids: Vec<i32>,
    pub user_ids: Vec<i32>,
    /// One entry per recipe: its id and the category it was linked to.
    pub recipes: Vec<RecipeCategory>,
    pub elapsed_ms: u64,
}

/// Resets the schema and populates it with reference and synthetic data.
pub struct Seeder {
    db: Database,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a new seeder with the given database pool and default config.
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: Database::new(pool),
            config: SeedConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the RNG seed for reproducible data.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the maximum number of concurrent inserts.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Drops and recreates the schema, then inserts categories, users and
    /// recipes.
    ///
    /// Only the schema reset is transactional. A failure during the inserts
    /// leaves whatever was already inserted in place.
    pub async fn run(&self) -> Result<SeedSummary, SeedError> {
        info!("Seeding the database.");
        let start = Instant::now();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        schema::reset(self.db.pool()).await?;

        let users = UserGenerator::new().generate_batch(self.config.user_count, &mut rng);

        let categories = self.config.unique_categories();
        if categories.len() < self.config.categories.len() {
            warn!(
                "Skipping {} repeated category names",
                self.config.categories.len() - categories.len()
            );
        }

        let (category_ids, user_ids) = tokio::try_join!(
            self.seed_categories(&categories),
            self.seed_users(&users),
        )?;

        if self.config.recipe_count > 0 {
            if user_ids.is_empty() {
                return Err(SeedError::NoUsers);
            }
            if category_ids.is_empty() {
                return Err(SeedError::NoCategories);
            }
        }

        let recipes = RecipeGenerator::with_config(self.config.recipe.clone()).generate_batch(
            self.config.recipe_count,
            &user_ids,
            &category_ids,
            &mut rng,
        );
        let recipes = self.seed_recipes(&recipes).await?;

        info!("Database is seeded.");

        Ok(SeedSummary {
            category_ids,
            user_ids,
            recipes,
            elapsed_ms: elapsed_millis(start.elapsed()),
        })
    }

    /// Seeds categories and returns their ids.
    pub async fn seed_categories(&self, names: &[String]) -> Result<Vec<i32>, SeedError> {
        info!("Seeding {} categories...", names.len());

        let ids = self
            .insert_batched(names.to_vec(), |db, name| async move {
                let id = db.insert_category(&NewCategory::new(name)).await?;
                Ok::<_, SeedError>(id)
            })
            .await?;

        info!("Seeded {} categories", ids.len());
        Ok(ids)
    }

    /// Seeds users and returns their ids.
    pub async fn seed_users(&self, users: &[GeneratedUser]) -> Result<Vec<i32>, SeedError> {
        info!("Seeding {} users...", users.len());

        let new_users: Vec<NewUser> = users.iter().map(GeneratedUser::to_new_user).collect();
        let ids = self
            .insert_batched(new_users, |db, user| async move {
                let id = db.insert_user(&user).await?;
                debug!("Inserted user {} ({})", id, user.username);
                Ok::<_, SeedError>(id)
            })
            .await?;

        info!("Seeded {} users", ids.len());
        Ok(ids)
    }

    /// Seeds recipes, linking each to its category once the recipe id is known.
    pub async fn seed_recipes(
        &self,
        recipes: &[GeneratedRecipe],
    ) -> Result<Vec<RecipeCategory>, SeedError> {
        info!("Seeding {} recipes...", recipes.len());

        let links = self
            .insert_batched(recipes.to_vec(), |db, generated| async move {
                let recipe_id = db.insert_recipe(&generated.recipe).await?;
                db.link_recipe_category(recipe_id, generated.category_id)
                    .await?;
                debug!(
                    "Inserted recipe {} for user {} in category {}",
                    recipe_id, generated.recipe.user_id, generated.category_id
                );
                Ok::<_, SeedError>(RecipeCategory {
                    recipe_id,
                    category_id: generated.category_id,
                })
            })
            .await?;

        info!("Seeded {} recipes", links.len());
        Ok(links)
    }

    /// Runs `insert` for every item as concurrent tasks, at most `batch_size`
    /// at a time. Results come back in completion order.
    async fn insert_batched<T, R, F, Fut>(
        &self,
        items: Vec<T>,
        insert: F,
    ) -> Result<Vec<R>, SeedError>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(Database, T) -> Fut,
        Fut: Future<Output = Result<R, SeedError>> + Send + 'static,
    {
        let batch_size = self.config.batch_size.max(1);
        let mut results = Vec::with_capacity(items.len());
        let mut items = items.into_iter().peekable();

        while items.peek().is_some() {
            let mut tasks = JoinSet::new();
            for item in items.by_ref().take(batch_size) {
                tasks.spawn(insert(self.db.clone(), item));
            }
            while let Some(joined) = tasks.join_next().await {
                results.push(joined??);
            }
        }

        Ok(results)
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Seeds the database with the default configuration.
///
/// Errors are logged and discarded; the caller gets no failure signal.
pub async fn seed(pool: &PgPool) {
    seed_with_config(pool, SeedConfig::default()).await;
}

/// Seeds the database with `config`, logging and discarding any error.
pub async fn seed_with_config(pool: &PgPool, config: SeedConfig) -> Option<SeedSummary> {
    match Seeder::new(pool.clone()).with_config(config).run().await {
        Ok(summary) => Some(summary),
        Err(e) => {
            error!("Seeding failed: {e}");
            None
        }
    }
}
