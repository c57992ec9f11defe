use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
const LOG_ENV: &str = "PIG_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the narration
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `PIG_LOG` value. Unset or blank means `warn`; anything
/// that is not a level name is handed back as the error.
fn parse_level(raw: Option<&str>) -> Result<LevelFilter, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(LevelFilter::Warn),
        Some(value) => value.parse().map_err(|_| value.to_owned()),
    }
}

/// Initialize logging with a level taken from the `PIG_LOG` environment variable.
/// Defaults to `warn`; an unrecognized value falls back to `warn` and is
/// reported once the logger is installed.
pub fn init_logging() {
    let raw = env::var(LOG_ENV).ok();
    let (level, rejected) = match parse_level(raw.as_deref()) {
        Ok(level) => (level, None),
        Err(value) => (LevelFilter::Warn, Some(value)),
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
        if let Some(value) = rejected {
            log::warn!(
                "{}={:?} is not a log level (error, warn, info, debug, trace, off); using warn",
                LOG_ENV,
                value
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_in_any_case() {
        assert_eq!(parse_level(Some("debug")), Ok(LevelFilter::Debug));
        assert_eq!(parse_level(Some("TRACE")), Ok(LevelFilter::Trace));
        assert_eq!(parse_level(Some(" off ")), Ok(LevelFilter::Off));
    }

    #[test]
    fn missing_value_defaults_to_warn() {
        assert_eq!(parse_level(None), Ok(LevelFilter::Warn));
        assert_eq!(parse_level(Some("")), Ok(LevelFilter::Warn));
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(parse_level(Some("loud")), Err("loud".to_owned()));
    }
}
