use thiserror::Error;

/// Failure taxonomy for the event-creation flow.
///
/// Each variant is terminal for the flow it occurs in. Per-day calendar
/// failures are deliberately absent: they are reported to the operator as
/// they happen and the flow continues with the remaining days.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Malformed title/date/time text, caught before any external call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The posting channel could not be resolved or is not usable.
    #[error("Destination unavailable: {0}")]
    DestinationUnavailable(String),

    /// None of the chosen tag names matched the destination's tag set.
    /// No summary post is made; already-created calendar entries are kept.
    #[error("No valid tags selected")]
    NoValidTags,

    /// The final publish step failed. Calendar entries created up to this
    /// point are left in place.
    #[error("Failed to post event: {0}")]
    PostError(String),
}
