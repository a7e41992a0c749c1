//! Logging setup: fern dispatch to stderr.
//!
//! The base level follows the `-v` count; `--log module[=level]` entries add
//! per-module overrides; `--log-time` prepends a timestamp.

use colored::Colorize;
use log::{Level, LevelFilter};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

fn level_name(level: Level) -> String {
    match level {
        Level::Error => "error".bright_red().to_string(),
        Level::Warn => "warn".yellow().to_string(),
        Level::Info => "info".green().to_string(),
        Level::Debug => "debug".magenta().to_string(),
        Level::Trace => "trace".normal().to_string(),
    }
}

/// Install the global logger.
pub fn setup(verbose: u8, targets: Vec<&str>, log_time: bool) -> Result<(), String> {
    let base_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = level_name(record.level());
            if log_time {
                let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
                let ts = now.format(&TIME_FORMAT).unwrap_or_default();
                out.finish(format_args!("{} crudtoml: {}: {}", ts, level, message))
            } else {
                out.finish(format_args!("crudtoml: {}: {}", level, message))
            }
        })
        .level(base_level);

    for target in targets {
        let (module, level) = match target.split_once('=') {
            Some((module, level)) => {
                let level = level
                    .parse::<LevelFilter>()
                    .map_err(|_| format!("invalid log level '{}' for '{}'", level, module))?;
                (module, level)
            }
            None => (target, LevelFilter::Trace),
        };
        dispatch = dispatch.level_for(module.to_string(), level);
    }

    dispatch
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| e.to_string())
}
