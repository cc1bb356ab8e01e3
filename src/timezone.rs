use time::{Date, OffsetDateTime};

/// Today's date in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined, e.g. in a
/// multi-threaded process on some Unix platforms.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|error| {
            tracing::debug!("Could not determine local offset, using UTC: {error}");
            OffsetDateTime::now_utc()
        })
        .date()
}
