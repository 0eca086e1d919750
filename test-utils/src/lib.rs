//! Marshbot Test Utils
//!
//! Shared testing utilities for the bot's data layer. Provides a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factory
//! methods for inserting test rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::EventIndex;
//!
//! #[tokio::test]
//! async fn test_event_index_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(EventIndex)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
