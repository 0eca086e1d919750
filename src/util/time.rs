use chrono::DateTime;
use chrono_tz::Tz;

/// Formats an instant for operator-facing messages, e.g.
/// "Tue, Mar 11 at 06:00 PM CDT".
pub fn display_local(dt: &DateTime<Tz>) -> String {
    dt.format("%a, %b %d at %I:%M %p %Z").to_string()
}
