//! Plain-text rendering of the schedule view

use std::fmt::Write;

use chrono::TimeZone;
use rust_i18n::t;

use crate::models::{Stream, StreamStatus};
use crate::schedule::parse_schedule_time;
use crate::translations::{translate, translate_with, Key, Locale};
use crate::view::ScheduleView;
use crate::vtubers::display_name;

/// Render the grouped schedule, one section per day
pub fn render_schedule<Tz: TimeZone>(view: &ScheduleView, locale: Locale, tz: &Tz) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", ScheduleView::title(locale));
    if !view.updated_at().is_empty() {
        let _ = writeln!(out, "{}", translate_with(locale, Key::UpdatedAt, view.updated_at()));
    }

    if view.stream_group().is_empty() {
        let _ = writeln!(out, "\n{}", t!("schedule.empty", locale = locale.code()));
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        t!(
            "schedule.summary",
            locale = locale.code(),
            streams = view.stream_count(),
            days = view.stream_group().len()
        )
    );

    for group in view.stream_group() {
        let _ = writeln!(out, "\n{}", group.day.format("%Y-%m-%d"));
        for stream in &group.streams {
            let _ = writeln!(out, "  {}", render_stream(stream, locale, tz));
        }
    }

    out
}

fn render_stream<Tz: TimeZone>(stream: &Stream, locale: Locale, tz: &Tz) -> String {
    // Grouped streams always parse; the raw value is only a last resort
    let time = parse_schedule_time(&stream.schedule_time, tz)
        .map(|time| time.naive_local().format("%H:%M").to_string())
        .unwrap_or_else(|| stream.schedule_time.clone());

    let mut line = format!(
        "{}  {}  {}",
        time,
        display_name(locale, &stream.vtuber_id),
        stream.title
    );

    match stream.status() {
        StreamStatus::Live => {
            let _ = write!(line, "  [{}]", translate(locale, Key::Streaming));
        }
        StreamStatus::Ended => {
            let _ = write!(line, "  [{}]", translate(locale, Key::StreamHasEnded));
        }
        StreamStatus::Scheduled => {}
    }

    line
}
