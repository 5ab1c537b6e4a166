use crate::errors::RecipeError;
use crate::models::{Category, NewCategory, NewRecipe, NewUser, Recipe, RecipeCategory, User};
use sqlx::PgPool;
use validator::Validate;

/// Row counts for every table in the schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub users: i64,
    pub recipes: i64,
    pub categories: i64,
    pub recipe_categories: i64,
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn insert_category(&self, category: &NewCategory) -> Result<i32, RecipeError> {
        category
            .validate()
            .map_err(|e| RecipeError::InvalidInput(e.to_string()))?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO category (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn insert_user(&self, user: &NewUser) -> Result<i32, RecipeError> {
        user.validate()
            .map_err(|e| RecipeError::InvalidInput(e.to_string()))?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO "user" (username, password)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Inserts a recipe and returns its generated id.
    ///
    /// The id comes back through `RETURNING` rather than `lastval()`, which
    /// would read another connection's sequence under a shared pool.
    pub async fn insert_recipe(&self, recipe: &NewRecipe) -> Result<i32, RecipeError> {
        recipe
            .validate()
            .map_err(|e| RecipeError::InvalidInput(e.to_string()))?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO recipe (title, ingredients, instructions, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(recipe.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn link_recipe_category(
        &self,
        recipe_id: i32,
        category_id: i32,
    ) -> Result<(), RecipeError> {
        sqlx::query(
            r#"
            INSERT INTO recipe_category (recipe_id, category_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(recipe_id)
        .bind(category_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, RecipeError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, username, password
            FROM "user"
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipeError> {
        let recipes: Vec<Recipe> = sqlx::query_as(
            r#"
            SELECT id, title, ingredients, instructions, user_id
            FROM recipe
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recipes)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, RecipeError> {
        let categories: Vec<Category> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM category
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn list_recipe_categories(&self) -> Result<Vec<RecipeCategory>, RecipeError> {
        let links: Vec<RecipeCategory> = sqlx::query_as(
            r#"
            SELECT recipe_id, category_id
            FROM recipe_category
            ORDER BY recipe_id, category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    pub async fn table_counts(&self) -> Result<TableCounts, RecipeError> {
        let (users, recipes, categories, recipe_categories): (i64, i64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM "user"),
                    (SELECT COUNT(*) FROM recipe),
                    (SELECT COUNT(*) FROM category),
                    (SELECT COUNT(*) FROM recipe_category)
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        Ok(TableCounts {
            users,
            recipes,
            categories,
            recipe_categories,
        })
    }
}
