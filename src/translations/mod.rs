//! Display strings of the dashboard
//!
//! Every label, VTuber name and batch name is a [`Key`] variant. Each locale
//! table is an exhaustive `match` over [`Key`], so a table that misses a key
//! does not compile. Data-driven names (a stream's `vtuber_id`) go through
//! [`lookup`] / [`translate_name`], which fall back to the literal name.

use std::fmt;

use thiserror::Error;
use tracing::warn;

mod en;
mod ja;
mod zh;

/// Placeholder substituted by [`translate_with`]
pub const INTERPOLATION: &str = "{$INTERPOLATION}";

macro_rules! translation_keys {
    ($($variant:ident => $name:literal,)*) => {
        /// Symbolic key of a display string
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every key, in table order
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Symbolic name used by the API and the web front end
            pub fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)*
                }
            }
        }
    };
}

translation_keys! {
    // UI
    UpdatedAt => "updatedAt",
    Name => "name",
    Total => "total",
    Subscribers => "subscribers",
    Views => "views",
    LastDay => "lastDay",
    Last7Days => "last7Days",
    Last30Days => "last30Days",
    YoutubeChannel => "youtubeChannel",
    BilibiliChannel => "bilibiliChannel",
    YoutubeStream => "youtubeStream",
    YoutubeSchedule => "youtubeSchedule",
    Settings => "settings",
    ToggleDarkMode => "toggleDarkMode",
    AverageViewers => "averageViewers",
    MaximumViewers => "maximumViewers",
    StreamHasEnded => "streamHasEnded",
    Streaming => "streaming",
    StreamStartTime => "streamStartTime",
    StreamDuration => "streamDuration",
    YoutubeSubscribers => "youtubeSubscribers",
    BilibiliSubscribers => "bilibiliSubscribers",
    YoutubeViews => "youtubeViews",
    BilibiliViews => "bilibiliViews",
    VtuberSelected => "vtuberSelected",
    SelectLanguage => "selectLanguage",
    RecentStreams => "recentStreams",
    StreamViewers => "streamViewers",

    // VTubers
    Hololive => "hololive",
    Yagoo => "yagoo",
    Sora => "sora",
    Roboco => "roboco",
    Miko => "miko",
    Suisei => "suisei",
    Fubuki => "fubuki",
    Matsuri => "matsuri",
    Haato => "haato",
    Aki => "aki",
    Mel => "mel",
    Choco => "choco",
    ChocoAlt => "choco_alt",
    Shion => "shion",
    Aqua => "aqua",
    Subaru => "subaru",
    Ayame => "ayame",
    Pekora => "pekora",
    Rushia => "rushia",
    Flare => "flare",
    Marine => "marine",
    Noel => "noel",
    Kanata => "kanata",
    Coco => "coco",
    Watame => "watame",
    Towa => "towa",
    HimemoriLuna => "himemoriluna",
    Lamy => "lamy",
    Nene => "nene",
    Botan => "botan",
    Polka => "polka",
    Mio => "mio",
    Okayu => "okayu",
    Korone => "korone",
    Azki => "azki",
    Risu => "risu",
    Moona => "moona",
    Iofi => "iofi",
    Ollie => "ollie",
    Melfissa => "melfissa",
    Reine => "reine",
    Amelia => "amelia",
    Calliope => "calliope",
    Gura => "gura",
    Inanis => "inanis",
    Kiara => "kiara",
    Luna => "luna",
    Nekomiya => "nekomiya",
    Tamaki => "tamaki",
    Pph => "pph",
    Nana => "nana",
    Ui => "ui",
    Miyabi => "miyabi",
    Izuru => "izuru",
    Aruran => "aruran",
    Rikka => "rikka",
    Astel => "astel",
    Temma => "temma",
    Roberu => "roberu",
    Shien => "shien",
    Oga => "oga",

    // Batches
    HololiveOg => "hololive_og",
    Hololive1st => "hololive_1st",
    Hololive2nd => "hololive_2nd",
    Hololive3rd => "hololive_3rd",
    Hololive4th => "hololive_4th",
    Hololive5th => "hololive_5th",
    HololiveGamers => "hololive_gamers",
    InnkMusic => "innk_music",
    HololiveId1st => "hololive_id_1st",
    HololiveId2nd => "hololive_id_2nd",
    HololiveEn => "hololive_en",
    Holostars1st => "holostars_1st",
    Holostars2nd => "holostars_2nd",
    Holostars3rd => "holostars_3rd",
    Others => "others",
}

impl Key {
    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL.iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Zh, Locale::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }

    /// Parse a language tag or POSIX locale name (`zh-TW`, `ja_JP.UTF-8`)
    pub fn from_code(code: &str) -> Option<Locale> {
        let lang = code.split(&['-', '_', '.'][..]).next()?.to_ascii_lowercase();

        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A symbolic name with no entry in the translation tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing translation key {0:?}")]
pub struct MissingTranslationKey(pub String);

pub fn translate(locale: Locale, key: Key) -> &'static str {
    match locale {
        Locale::En => en::translate(key),
        Locale::Zh => zh::translate(key),
        Locale::Ja => ja::translate(key),
    }
}

/// Translate `key` and substitute its interpolation placeholder with `value`
pub fn translate_with(locale: Locale, key: Key, value: &str) -> String {
    translate(locale, key).replace(INTERPOLATION, value)
}

pub fn lookup(locale: Locale, name: &str) -> Result<&'static str, MissingTranslationKey> {
    Key::from_name(name)
        .map(|key| translate(locale, key))
        .ok_or_else(|| MissingTranslationKey(name.to_string()))
}

/// Like [`lookup`], degrading to the literal name for unknown keys
pub fn translate_name<'a>(locale: Locale, name: &'a str) -> &'a str {
    match lookup(locale, name) {
        Ok(text) => text,
        Err(err) => {
            warn!(locale = %locale, "{}", err);
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_names_round_trip() {
        for &key in Key::ALL {
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn test_key_names_unique() {
        let names: HashSet<&str> = Key::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), Key::ALL.len());
    }

    #[test]
    fn test_every_locale_covers_every_key() {
        for &locale in Locale::ALL {
            for &key in Key::ALL {
                assert!(
                    !translate(locale, key).trim().is_empty(),
                    "{} has an empty entry for {}",
                    locale,
                    key
                );
                assert!(lookup(locale, key.name()).is_ok());
            }
        }
    }

    #[test]
    fn test_only_updated_at_interpolates() {
        for &locale in Locale::ALL {
            for &key in Key::ALL {
                let text = translate(locale, key);
                assert_eq!(
                    text.contains(INTERPOLATION),
                    key == Key::UpdatedAt,
                    "{} {}",
                    locale,
                    key
                );
            }
        }
    }

    #[test]
    fn test_translate_with_updated_at() {
        let value = "2021-01-01T00:00:00Z";

        for &locale in Locale::ALL {
            let text = translate_with(locale, Key::UpdatedAt, value);
            assert!(text.contains(value));
            assert!(!text.contains(INTERPOLATION));
            assert!(!text.contains("{$"));
        }

        assert_eq!(
            translate_with(Locale::Zh, Key::UpdatedAt, value),
            "更新于 2021-01-01T00:00:00Z"
        );
        assert_eq!(
            translate_with(Locale::En, Key::UpdatedAt, value),
            "Updated at 2021-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            lookup(Locale::En, "nobody"),
            Err(MissingTranslationKey("nobody".to_string()))
        );
        assert_eq!(translate_name(Locale::Ja, "nobody"), "nobody");
        assert_eq!(translate_name(Locale::Ja, "sora"), "ときのそら");
        assert_eq!(translate_name(Locale::En, "choco_alt"), "Yuzuki Choco Sub");
    }

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("zh_TW.UTF-8"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("ja-JP"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("JA"), Some(Locale::Ja));
        assert_eq!(Locale::from_code("ko-KR"), None);
        assert_eq!(Locale::from_code(""), None);
    }
}
