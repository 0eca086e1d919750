pub use crate::data::event_index::EventIndexRepository;
pub use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
pub use test_utils::{builder::TestBuilder, factory};

mod find_by_event_id;
mod upsert;
