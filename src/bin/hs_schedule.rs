//! hs_schedule - Show the HoloStats YouTube stream schedule
//!
//! Fetches the upcoming streams, groups them by calendar day and prints
//! them with localized labels and VTuber names.

use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone, Utc};
use clap::{value_parser, Arg, ArgAction, Command};
use rust_i18n::t;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use holostats::api::{ApiClient, FileSource, ScheduleSource, DEFAULT_API_URL};
use holostats::i18n::init_locale;
use holostats::render::render_schedule;
use holostats::translations::Locale;
use holostats::view::ScheduleView;
use holostats::vtubers;

rust_i18n::i18n!("locales", fallback = "en");

fn build_cli() -> Command {
    Command::new("hs_schedule")
        .about(t!("help.hs_schedule.about").to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .arg(
            Arg::new("api")
                .long("api")
                .help(t!("help.hs_schedule.api").to_string())
                .env("HOLOSTATS_API")
                .default_value(DEFAULT_API_URL)
                .value_name("URL")
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help(t!("help.hs_schedule.file").to_string())
                .value_name("PATH")
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help(t!("help.hs_schedule.lang").to_string())
                .value_name("CODE")
        )
        .arg(
            Arg::new("utc")
                .long("utc")
                .help(t!("help.hs_schedule.utc").to_string())
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help(t!("help.hs_schedule.timeout").to_string())
                .value_name("SECS")
                .value_parser(value_parser!(u64))
                .default_value("30")
        )
        .arg(
            Arg::new("vtuber")
                .long("vtuber")
                .help(t!("help.hs_schedule.vtuber").to_string())
                .value_name("ID")
                .value_delimiter(',')
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help(t!("help.hs_schedule.verbose").to_string())
                .action(ArgAction::Count)
        )
}

/// Log to stderr; `RUST_LOG` overrides the level picked from `-v`
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn show<Tz: TimeZone>(
    source: &dyn ScheduleSource,
    mut view: ScheduleView,
    locale: Locale,
    tz: &Tz,
) -> Result<()> {
    view.refresh(source, tz)
        .context(t!("hs_schedule.failed_load_schedule").to_string())?;

    print!("{}", render_schedule(&view, locale, tz));

    Ok(())
}

fn main() -> Result<()> {
    // Initialize locale from LANG environment variable
    let mut locale = init_locale(None);

    let matches = build_cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    if let Some(code) = matches.get_one::<String>("lang") {
        let requested = match Locale::from_code(code) {
            Some(requested) => requested,
            None => {
                let supported: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
                bail!(
                    "{}",
                    t!(
                        "hs_schedule.unsupported_language",
                        code = code,
                        supported = supported.join(", ")
                    )
                );
            }
        };
        locale = init_locale(Some(requested));
    }

    let mut view = ScheduleView::new();
    if let Some(ids) = matches.get_many::<String>("vtuber") {
        let ids: Vec<String> = ids.map(|id| id.trim().to_string()).collect();
        if let Some(unknown) = ids.iter().find(|id| vtubers::find(id).is_none()) {
            bail!("{}", t!("hs_schedule.unknown_vtuber", id = unknown));
        }
        view = view.with_vtubers(ids);
    }

    // A saved response takes precedence over the API
    let source: Box<dyn ScheduleSource> = match matches.get_one::<String>("file") {
        Some(path) => {
            let path = PathBuf::from(path);
            eprintln!("{}", t!("hs_schedule.reading", path = path.display().to_string()));
            Box::new(FileSource::new(path))
        }
        None => {
            // Both have defaults, so they are always present
            let api = matches
                .get_one::<String>("api")
                .map(String::as_str)
                .unwrap_or(DEFAULT_API_URL);
            let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(30);

            let client = ApiClient::new(api, Duration::from_secs(timeout))
                .context(t!("hs_schedule.failed_build_client").to_string())?;
            eprintln!("{}", t!("hs_schedule.fetching", url = client.schedule_url()));
            Box::new(client)
        }
    };

    if matches.get_flag("utc") {
        show(source.as_ref(), view, locale, &Utc)
    } else {
        show(source.as_ref(), view, locale, &Local)
    }
}
