/// The human-facing summary artifact published at the end of a wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    /// Post title; prefixed with the date range for forum destinations.
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// The originally chosen tag names (not just the matched ones).
    pub tag_names: Vec<String>,
    /// One line per covered day, ascending date order.
    pub when_lines: Vec<String>,
    /// Inline calendar links, "+N more" beyond three. None when every
    /// per-day creation failed.
    pub calendar_field: Option<String>,
    /// Primary calendar entry id, used for RSVP button wiring. None when no
    /// entry was created.
    pub event_id: Option<String>,
}

/// Identifiers of the published summary post, used for persistence and
/// reminder targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedSummary {
    pub channel_id: u64,
    pub message_id: Option<u64>,
    pub thread_id: Option<u64>,
}
