//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Member, Role, User) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn resolves_rank() {
//!     let recruit = create_test_role(222222222, "Рекрут", 0x00FF00, 1);
//!     let member = create_test_member(42, "player", Some("Ник"), &[222222222]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod member;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
