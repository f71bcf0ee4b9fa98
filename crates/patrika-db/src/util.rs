use chrono::{DateTime, FixedOffset, Utc};

/// Timestamps are assigned by the application rather than by column defaults
/// so the sqlite test backend and Postgres behave identically.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
