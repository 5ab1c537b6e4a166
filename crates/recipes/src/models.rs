use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct RecipeCategory {
    pub recipe_id: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRecipe {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub user_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_title_limits() {
        let mut recipe = NewRecipe {
            title: "Braised short ribs".to_string(),
            ingredients: vec!["ribs".to_string()],
            instructions: vec!["braise".to_string()],
            user_id: 1,
        };
        assert!(recipe.validate().is_ok());

        recipe.title = String::new();
        assert!(recipe.validate().is_err());

        recipe.title = "x".repeat(256);
        assert!(recipe.validate().is_err());

        recipe.title = "x".repeat(255);
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_category_name_limits() {
        assert!(NewCategory::new("Soups").validate().is_ok());
        assert!(NewCategory::new("").validate().is_err());
        assert!(NewCategory::new("a".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_user_requires_credentials() {
        let user = NewUser {
            username: "cook42".to_string(),
            password: String::new(),
        };
        assert!(user.validate().is_err());
    }
}
