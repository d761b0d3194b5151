//! Steps of a run that happen before logging is available.

use crate::error::MovieDbError;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::Write;
use std::panic::Location;
use std::path::Path;

use log::error;

/// Create the config directory (which also holds the log file).
#[track_caller]
pub fn prepare_config_dir(dir: &Path) -> Result<(), MovieDbError> {
    create_dir_all(dir).map_err(|e| MovieDbError::MovieDb {
        message: format!("Failed to create config directory {}: {e}", dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Report the error that ended the run.
///
/// Goes through the logger when it is installed, otherwise straight to
/// `fallback` so failures before logger setup are not silent.
pub fn report_error<W: Write>(error: &MovieDbError, logger_ready: bool, fallback: &mut W) {
    if logger_ready {
        error!("{error}");
    } else {
        // Nothing left to report a failed write to.
        let _ = writeln!(fallback, "{error}");
    }
}
