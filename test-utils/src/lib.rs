//! DSHB Bot Test Utils
//!
//! Provides shared testing utilities for the bot. This crate offers a builder for
//! test contexts backed by a temporary directory (for the JSON-file stores) and
//! factories for serenity objects deserialized from JSON.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for seeding store files before a test
//! - **TestContext**: Temporary directory holding the seeded files
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for `Member`, `Role` and `User`
//! - **time**: Fixed instants for deterministic date arithmetic
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[test]
//! fn loads_existing_dates() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_file("promotionDates.json", r#"{"42": "2025-01-01T00:00:00Z"}"#)
//!         .build()?;
//!
//!     let path = test.path("promotionDates.json");
//!     // Open the store at `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
pub mod time;
