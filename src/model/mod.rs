//! Domain models for the event-creation flow and its collaborators.

pub mod calendar;
pub mod destination;
pub mod draft;
pub mod summary;
pub mod tags;
