//! Wire types of the HoloStats v3 API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled, live or finished YouTube stream.
///
/// `schedule_time` stays in its raw ISO-8601 form; it is parsed when the
/// schedule is grouped so that a malformed value is reported instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub stream_id: String,
    pub title: String,
    pub vtuber_id: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub schedule_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_viewer_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_viewer_count: Option<i32>,
}

/// Broadcast state derived from the start/end times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Scheduled,
    Live,
    Ended,
}

impl Stream {
    pub fn status(&self) -> StreamStatus {
        match (self.start_time, self.end_time) {
            (_, Some(_)) => StreamStatus::Ended,
            (Some(_), None) => StreamStatus::Live,
            (None, None) => StreamStatus::Scheduled,
        }
    }
}

/// Response body of `GET /api/v3/youtube_schedule_stream`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub updated_at: String,
    pub streams: Vec<Stream>,
}
