//! The event materialization engine.
//!
//! Turns loosely-formatted operator input into one calendar entry per covered
//! day plus a single summary post. The flow in [`flow`] is an explicit state
//! machine owning its draft for the lifetime of one run; the Discord UI, the
//! calendar service, and the tag catalog plug in behind traits so the engine
//! can be driven by mocks in tests.

pub mod datetime;
pub mod flow;
pub mod summary;
pub mod tags;

#[cfg(test)]
mod test;
