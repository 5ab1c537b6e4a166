//! Database integration for seeding test data.
//!
//! The [`Seeder`] resets the schema and inserts generated rows with bounded
//! concurrency. [`seed`] is the fire-and-forget entry point used by the
//! `seed` binary.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder, seed, seed_with_config};
