pub use crate::data::event_tag::EventTagRepository;
pub use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
pub use test_utils::{builder::TestBuilder, factory};

mod add_tags;
