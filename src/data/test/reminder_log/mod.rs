pub use crate::data::reminder_log::ReminderLogRepository;
pub use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
pub use test_utils::{builder::TestBuilder, factory};

mod mark_sent;
