//! View-model of the YouTube schedule page
//!
//! Holds the state the presentation layer reads: the loading flag, the
//! day-grouped streams, the `updatedAt` stamp and the last error.

use chrono::TimeZone;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{ApiError, ScheduleSource};
use crate::models::Stream;
use crate::schedule::{group_by_day, DayGroup, ParseError};
use crate::translations::{translate, Key, Locale};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Default)]
pub struct ScheduleView {
    loading: bool,
    stream_group: Vec<DayGroup>,
    updated_at: String,
    error: Option<String>,
    vtubers: Option<Vec<String>>,
}

impl ScheduleView {
    pub fn new() -> Self {
        ScheduleView::default()
    }

    /// Only keep streams of the given VTuber ids
    pub fn with_vtubers(mut self, ids: Vec<String>) -> Self {
        self.vtubers = Some(ids);
        self
    }

    /// Page title, e.g. `YouTube Schedule | HoloStats`
    pub fn title(locale: Locale) -> String {
        format!("{} | HoloStats", translate(locale, Key::YoutubeSchedule))
    }

    /// Stable identity of a list item
    pub fn track_by(stream: &Stream) -> &str {
        &stream.stream_id
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn stream_group(&self) -> &[DayGroup] {
        &self.stream_group
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn stream_count(&self) -> usize {
        self.stream_group.iter().map(|g| g.streams.len()).sum()
    }

    /// Fetch the schedule and rebuild the day groups
    ///
    /// On success the groups and `updated_at` are replaced in one step. On
    /// failure the previous groups are kept, `loading` is cleared and the
    /// error is recorded and returned.
    pub fn refresh<S, Tz>(&mut self, source: &S, tz: &Tz) -> Result<(), ViewError>
    where
        S: ScheduleSource + ?Sized,
        Tz: TimeZone,
    {
        self.loading = true;
        let result = self.load(source, tz);
        self.loading = false;

        match result {
            Ok((updated_at, stream_group)) => {
                self.updated_at = updated_at;
                self.stream_group = stream_group;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                warn!("failed to refresh schedule: {}", err);
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn load<S, Tz>(&self, source: &S, tz: &Tz) -> Result<(String, Vec<DayGroup>), ViewError>
    where
        S: ScheduleSource + ?Sized,
        Tz: TimeZone,
    {
        let response = source.youtube_schedule_stream()?;
        let received = response.streams.len();

        let streams = response.streams.into_iter().filter(|stream| match &self.vtubers {
            Some(ids) => ids.iter().any(|id| *id == stream.vtuber_id),
            None => true,
        });
        let groups = group_by_day(streams, tz)?;

        debug!(received, groups = groups.len(), "schedule view refreshed");

        Ok((response.updated_at, groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleResponse;
    use chrono::Utc;
    use std::cell::RefCell;

    fn stream(id: &str, vtuber_id: &str, schedule_time: &str) -> Stream {
        Stream {
            stream_id: id.to_string(),
            title: format!("stream {}", id),
            vtuber_id: vtuber_id.to_string(),
            thumbnail_url: None,
            schedule_time: schedule_time.to_string(),
            start_time: None,
            end_time: None,
            average_viewer_count: None,
            max_viewer_count: None,
        }
    }

    /// Hands out queued responses, one per call
    struct StubSource {
        responses: RefCell<Vec<Result<ScheduleResponse, ApiError>>>,
    }

    impl StubSource {
        fn new(mut responses: Vec<Result<ScheduleResponse, ApiError>>) -> Self {
            responses.reverse();
            StubSource {
                responses: RefCell::new(responses),
            }
        }
    }

    impl ScheduleSource for StubSource {
        fn youtube_schedule_stream(&self) -> Result<ScheduleResponse, ApiError> {
            self.responses
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| panic!("no response queued"))
        }
    }

    fn response(updated_at: &str, streams: Vec<Stream>) -> ScheduleResponse {
        ScheduleResponse {
            updated_at: updated_at.to_string(),
            streams,
        }
    }

    fn status_error() -> ApiError {
        ApiError::Status {
            url: "https://holostats.cn/api/v3/youtube_schedule_stream".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        }
    }

    #[test]
    fn test_refresh_groups_streams() {
        let source = StubSource::new(vec![Ok(response(
            "2021-01-01T00:00:00Z",
            vec![
                stream("a", "sora", "2021-01-01T08:00:00Z"),
                stream("b", "miko", "2021-01-01T20:00:00Z"),
                stream("c", "sora", "2021-01-02T08:00:00Z"),
            ],
        ))]);
        let mut view = ScheduleView::new();

        view.refresh(&source, &Utc).unwrap();

        assert!(!view.loading());
        assert_eq!(view.updated_at(), "2021-01-01T00:00:00Z");
        assert_eq!(view.stream_group().len(), 2);
        assert_eq!(view.stream_count(), 3);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_refresh_replaces_groups() {
        let source = StubSource::new(vec![
            Ok(response(
                "first",
                vec![stream("a", "sora", "2021-01-01T08:00:00Z")],
            )),
            Ok(response(
                "second",
                vec![
                    stream("b", "sora", "2021-01-03T08:00:00Z"),
                    stream("c", "sora", "2021-01-04T08:00:00Z"),
                ],
            )),
        ]);
        let mut view = ScheduleView::new();

        view.refresh(&source, &Utc).unwrap();
        view.refresh(&source, &Utc).unwrap();

        assert_eq!(view.updated_at(), "second");
        let ids: Vec<&str> = view
            .stream_group()
            .iter()
            .flat_map(|g| g.streams.iter().map(ScheduleView::track_by))
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_groups() {
        let source = StubSource::new(vec![
            Ok(response(
                "first",
                vec![stream("a", "sora", "2021-01-01T08:00:00Z")],
            )),
            Err(status_error()),
            Ok(response(
                "third",
                vec![
                    stream("b", "sora", "2021-01-02T08:00:00Z"),
                    stream("c", "sora", "not a time"),
                ],
            )),
        ]);
        let mut view = ScheduleView::new();
        view.refresh(&source, &Utc).unwrap();

        let err = view.refresh(&source, &Utc).unwrap_err();
        assert!(matches!(err, ViewError::Api(ApiError::Status { .. })));
        assert!(!view.loading());
        assert!(view.error().is_some());
        assert_eq!(view.updated_at(), "first");
        assert_eq!(view.stream_count(), 1);

        let err = view.refresh(&source, &Utc).unwrap_err();
        assert!(matches!(err, ViewError::Parse(ParseError { index: 1, .. })));
        assert_eq!(view.updated_at(), "first");
        assert_eq!(view.stream_group()[0].streams[0].stream_id, "a");
    }

    #[test]
    fn test_undecodable_response_keeps_previous_groups() {
        let missing_schedule_time = serde_json::from_str::<ScheduleResponse>(
            r#"{"updatedAt": "second", "streams": [{"streamId": "b", "title": "t", "vtuberId": "sora"}]}"#,
        )
        .unwrap_err();
        let source = StubSource::new(vec![
            Ok(response(
                "first",
                vec![stream("a", "sora", "2021-01-01T08:00:00Z")],
            )),
            Err(ApiError::Decode(missing_schedule_time)),
        ]);
        let mut view = ScheduleView::new();
        view.refresh(&source, &Utc).unwrap();

        let err = view.refresh(&source, &Utc).unwrap_err();

        assert!(matches!(err, ViewError::Api(ApiError::Decode(_))));
        assert!(!view.loading());
        assert!(view.error().is_some());
        assert_eq!(view.updated_at(), "first");
        assert_eq!(view.stream_count(), 1);
        assert_eq!(view.stream_group()[0].streams[0].stream_id, "a");
    }

    #[test]
    fn test_vtuber_filter_applies_before_grouping() {
        let source = StubSource::new(vec![Ok(response(
            "now",
            vec![
                stream("a", "sora", "2021-01-01T08:00:00Z"),
                stream("b", "miko", "2021-01-02T08:00:00Z"),
                stream("c", "sora", "2021-01-01T20:00:00Z"),
            ],
        ))]);
        let mut view = ScheduleView::new().with_vtubers(vec!["sora".to_string()]);

        view.refresh(&source, &Utc).unwrap();

        assert_eq!(view.stream_group().len(), 1);
        assert_eq!(view.stream_count(), 2);
    }

    #[test]
    fn test_title() {
        assert_eq!(ScheduleView::title(Locale::En), "YouTube Schedule | HoloStats");
        assert_eq!(ScheduleView::title(Locale::Zh), "YouTube 預定直播 | HoloStats");
    }
}
