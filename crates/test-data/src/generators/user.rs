//! User generation.

use std::collections::HashSet;

use fake::{
    Fake,
    faker::internet::en::{Password, Username},
};
use rand::Rng;

use recipes::models::NewUser;

/// Generated user data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub username: String,
    pub password: String,
}

impl GeneratedUser {
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Generates user credentials for testing.
#[derive(Debug, Default)]
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single user.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedUser {
        let username: String = Username().fake_with_rng(rng);
        let password: String = Password(8..16).fake_with_rng(rng);

        GeneratedUser { username, password }
    }

    /// Generates multiple users with distinct usernames.
    ///
    /// The `username` column is `UNIQUE`, so a repeated name gets a numeric
    /// suffix instead of failing the insert.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedUser> {
        let mut seen = HashSet::with_capacity(count);
        let mut users = Vec::with_capacity(count);

        while users.len() < count {
            let mut user = self.generate(rng);
            while seen.contains(&user.username) {
                let suffix: u32 = rng.gen_range(1..9999);
                user.username = format!("{}{suffix}", user.username);
            }
            seen.insert(user.username.clone());
            users.push(user);
        }

        users
    }
}
