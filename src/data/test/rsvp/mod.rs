pub use crate::data::rsvp::RsvpRepository;
pub use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
pub use test_utils::{builder::TestBuilder, factory};

mod set_status;
