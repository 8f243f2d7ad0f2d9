//! HoloStats schedule viewer
//!
//! Fetches the upcoming YouTube streams of the HoloStats API, groups them by
//! calendar day and renders them with localized labels and VTuber names.

rust_i18n::i18n!("locales", fallback = "en");

pub mod api;
pub mod i18n;
pub mod models;
pub mod render;
pub mod schedule;
pub mod translations;
pub mod view;
pub mod vtubers;
