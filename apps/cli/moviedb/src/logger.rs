//! Logging for the moviedb binary.
//!
//! Log records go to stderr (colored) and a plain log file, keeping stdout
//! free for the movie listing.

use crate::error::MovieDbError;

use common::ErrorLocation;

use std::env;
use std::io::stderr;
use std::path::Path;
use std::str::FromStr;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

/// Set once a dispatcher is installed and records reach stderr.
static LOGGER_READY: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "moviedb.log";

/// Environment variable overriding the build-default level (e.g. `trace`).
pub const LOG_LEVEL_ENV: &str = "MOVIEDB_LOG";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// HTTP internals are noisy below this level.
const DEPENDENCY_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialize the logger with dual output (stderr + file).
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the dispatcher
/// cannot be installed.
pub fn initialize(log_dir: &Path) -> Result<(), MovieDbError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        let level = resolve_level(env::var(LOG_LEVEL_ENV).ok().as_deref());
        result = initialize_internal(log_dir, level);
        if result.is_ok() {
            LOGGER_READY.store(true, Ordering::SeqCst);
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

/// Whether [`initialize`] installed the dispatcher.
pub fn is_ready() -> bool {
    LOGGER_READY.load(Ordering::SeqCst)
}

/// Level from the override value, falling back to the build default.
pub fn resolve_level(override_value: Option<&str>) -> LevelFilter {
    override_value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[track_caller]
pub(crate) fn initialize_internal(log_dir: &Path, level: LevelFilter) -> Result<(), MovieDbError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let base_dispatch = Dispatch::new()
        .level(level)
        .level_for("hyper", DEPENDENCY_LOG_LEVEL)
        .level_for("hyper_util", DEPENDENCY_LOG_LEVEL)
        .level_for("reqwest", DEPENDENCY_LOG_LEVEL)
        .level_for("rustls", DEPENDENCY_LOG_LEVEL);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    // File keeps the call site for debugging.
    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(
            fern::log_file(&log_file_path).map_err(|e| MovieDbError::MovieDb {
                message: format!("Failed to create log file: {e}"),
                location: ErrorLocation::from(std::panic::Location::caller()),
            })?,
        );

    base_dispatch
        .chain(stderr_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| MovieDbError::MovieDb {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(std::panic::Location::caller()),
        })?;

    Ok(())
}
