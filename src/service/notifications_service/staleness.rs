use crate::error::Error;
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
};

///
/// Parses event timestamp in RFC 3339 or ISO-8601 format.
///
/// Date and time without offset is local time (`local_offset`),
/// bare date is midnight UTC.
///
/// ### Errors
/// - [Error::InvalidTimestamp]
///
pub fn parse_event_timestamp(
    timestamp: &str,
    local_offset: UtcOffset,
) -> Result<OffsetDateTime, Error> {
    let timestamp = timestamp.trim();

    OffsetDateTime::parse(timestamp, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(timestamp, &Iso8601::DEFAULT))
        .or_else(|_| {
            PrimitiveDateTime::parse(timestamp, &Iso8601::DEFAULT)
                .map(|datetime| datetime.assume_offset(local_offset))
        })
        .or_else(|_| {
            Date::parse(timestamp, format_description!("[year]-[month]-[day]"))
                .map(|date| date.midnight().assume_utc())
        })
        .map_err(|err| Error::InvalidTimestamp(format!("{timestamp}: {err}")))
}

/// Midnight of the day `now` belongs to, in the offset of `now`
pub fn start_of_day(now: OffsetDateTime) -> OffsetDateTime {
    now.replace_time(Time::MIDNIGHT)
}

///
/// Event is stale when it happened strictly before the day of `now` started.
///
pub fn is_stale(event: OffsetDateTime, now: OffsetDateTime) -> bool {
    event < start_of_day(now)
}
