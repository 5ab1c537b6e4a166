//! Schema DDL for the recipe box.
//!
//! The schema is not migrated: [`reset`] drops every table and recreates it
//! from scratch, which is all the seeding workflow needs.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::errors::RecipeError;

/// Tables in drop order, children first. `user` is reserved in PostgreSQL and
/// must stay quoted.
pub const TABLES: [&str; 4] = ["recipe_category", "category", "recipe", "\"user\""];

/// Table definitions in creation order, parents first.
pub const CREATE_STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE "user" (
        id SERIAL PRIMARY KEY,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE recipe (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        ingredients TEXT[],
        instructions TEXT[],
        user_id INTEGER NOT NULL REFERENCES "user"(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE category (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) UNIQUE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE recipe_category (
        recipe_id INTEGER REFERENCES recipe(id) ON DELETE CASCADE,
        category_id INTEGER REFERENCES category(id) ON DELETE CASCADE,
        PRIMARY KEY (recipe_id, category_id)
    )
    "#,
];

/// Builds the single `DROP TABLE` statement covering every table.
pub fn drop_statement() -> String {
    format!("DROP TABLE IF EXISTS {} CASCADE", TABLES.join(", "))
}

/// Drops and recreates all tables.
///
/// Runs in one transaction: if any statement fails, nothing is committed and
/// the previous schema (and its rows) is left untouched.
pub async fn reset(pool: &PgPool) -> Result<(), RecipeError> {
    info!("Resetting schema ({} tables)", TABLES.len());

    let mut tx = pool.begin().await?;

    sqlx::query(&drop_statement()).execute(&mut *tx).await?;

    for statement in CREATE_STATEMENTS {
        debug!("{}", statement.trim());
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!("Schema reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_table(statement: &str) -> &str {
        statement
            .trim()
            .trim_start_matches("CREATE TABLE ")
            .split_whitespace()
            .next()
            .unwrap()
    }

    #[test]
    fn test_drop_covers_every_table() {
        let drop = drop_statement();
        assert!(drop.starts_with("DROP TABLE IF EXISTS recipe_category, category, recipe"));
        for statement in CREATE_STATEMENTS {
            assert!(drop.contains(created_table(statement)));
        }
    }

    #[test]
    fn test_parents_created_before_children() {
        let order: Vec<&str> = CREATE_STATEMENTS.iter().map(|s| created_table(s)).collect();
        let position = |name: &str| order.iter().position(|t| *t == name).unwrap();

        assert!(position("\"user\"") < position("recipe"));
        assert!(position("recipe") < position("recipe_category"));
        assert!(position("category") < position("recipe_category"));
    }

    #[test]
    fn test_foreign_keys_cascade() {
        for statement in CREATE_STATEMENTS {
            let references = statement.matches("REFERENCES").count();
            let cascades = statement.matches("ON DELETE CASCADE").count();
            assert_eq!(references, cascades, "{statement}");
        }
    }
}
