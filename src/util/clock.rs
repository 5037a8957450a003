//! Current date for export filenames.

/// Today's date in UTC.
#[must_use]
pub fn today() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}
