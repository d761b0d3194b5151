use crate::error::MovieDbError;

use common::ErrorLocation;

use std::panic::Location;

pub const DEFAULT_PAGE: u32 = 1;

/// Parse the optional page argument. Pages start at 1.
#[track_caller]
pub fn parse_page(arg: Option<&str>) -> Result<u32, MovieDbError> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_PAGE);
    };

    match arg.trim().parse::<u32>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(MovieDbError::Argument {
            message: format!("Page must be a positive integer, got '{arg}'"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
