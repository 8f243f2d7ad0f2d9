//! Day grouping of the stream schedule
//!
//! Streams arrive ordered by schedule time. They are bucketed by calendar day
//! in a single pass: a stream joins the last bucket only when it falls on the
//! same day as the stream right before it, otherwise it opens a new bucket.
//! Same-day streams that are not adjacent in the input therefore end up in
//! separate buckets.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::Stream;

/// ISO-8601 forms with an offset that RFC 3339 does not cover
/// (`+0900`, `+09`, basic format `20210101T100000`)
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// Formats accepted for a schedule time without a UTC offset
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Streams sharing one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub streams: Vec<Stream>,
}

/// A stream whose schedule time could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid schedule time {value:?} for stream {stream_id} at position {index}")]
pub struct ParseError {
    pub index: usize,
    pub stream_id: String,
    pub value: String,
}

/// Parse an ISO-8601 schedule time into the given time zone
///
/// Values carrying an offset are converted; values without one are read as
/// wall-clock time in `tz`, and a bare date means midnight.
pub fn parse_schedule_time<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let value = value.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(tz));
    }

    // `Z` is spelled as an explicit zero offset for the non-RFC 3339 forms
    let with_offset = match value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => value.to_string(),
    };
    if let Some(time) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&with_offset, format).ok())
    {
        return Some(time.with_timezone(tz));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    // `earliest` resolves DST folds; a time inside a DST gap does not exist
    tz.from_local_datetime(&naive).earliest()
}

/// Group an ordered stream sequence into calendar days of `tz`
///
/// Aborts at the first malformed schedule time; no stream is dropped.
pub fn group_by_day<Tz, I>(streams: I, tz: &Tz) -> Result<Vec<DayGroup>, ParseError>
where
    Tz: TimeZone,
    I: IntoIterator<Item = Stream>,
{
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut last_day: Option<NaiveDate> = None;
    let mut total: usize = 0;

    for (index, stream) in streams.into_iter().enumerate() {
        let schedule = parse_schedule_time(&stream.schedule_time, tz).ok_or_else(|| ParseError {
            index,
            stream_id: stream.stream_id.clone(),
            value: stream.schedule_time.clone(),
        })?;
        let day = schedule.date_naive();

        match groups.last_mut() {
            Some(group) if last_day == Some(day) => group.streams.push(stream),
            _ => groups.push(DayGroup {
                day,
                streams: vec![stream],
            }),
        }

        last_day = Some(day);
        total += 1;
    }

    debug!(streams = total, groups = groups.len(), "grouped schedule by day");

    Ok(groups)
}

/// [`group_by_day`] in the system's local time zone
pub fn group_by_day_local<I>(streams: I) -> Result<Vec<DayGroup>, ParseError>
where
    I: IntoIterator<Item = Stream>,
{
    group_by_day(streams, &Local)
}
