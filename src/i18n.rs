//! Internationalization (i18n) support
//!
//! This module handles locale detection and initialization for multi-language support.
//! Supported languages: English (en), Chinese (zh), Japanese (ja)
//!
//! The locale is detected from the LANG environment variable unless one is
//! requested explicitly.

use rust_i18n::set_locale;
use sys_locale::get_locale;

use crate::translations::Locale;

/// Initialize the active locale
///
/// Uses `requested` when given, otherwise the system locale. Falls back to
/// English if the system locale is not supported. The same locale drives the
/// CLI message catalog and the dashboard translation tables.
pub fn init_locale(requested: Option<Locale>) -> Locale {
    let locale = requested.unwrap_or_else(detect_locale);
    set_locale(locale.code());
    locale
}

/// Detect the system locale and return a supported locale
pub fn detect_locale() -> Locale {
    get_locale()
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or_default()
}
