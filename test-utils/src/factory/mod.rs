//! Factory methods for creating test data.
//!
//! Each persistent table has a factory module with a builder-style `Factory`
//! struct for customization and a `create_*` convenience function for quick
//! default creation. Factories generate unique identifiers automatically so
//! tests don't collide.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let row = factory::event_index::create_event_index(&db).await?;
//!
//! // Customize via the builder
//! let row = factory::event_index::EventIndexFactory::new(&db)
//!     .event_id("gcal-abc123")
//!     .thread_id(Some("555".to_string()))
//!     .build()
//!     .await?;
//! ```

pub mod event_index;
pub mod event_tag;
pub mod helpers;
pub mod reminder_log;
pub mod rsvp;

// Re-export commonly used factory functions for concise usage
pub use event_index::create_event_index;
pub use event_tag::create_event_tag;
pub use reminder_log::create_reminder_marker;
pub use rsvp::create_rsvp;
