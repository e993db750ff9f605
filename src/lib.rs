//! Bundled ephemeris and time data files for Skyfield, with a freshness check.
//!
//! The data directory ships `de421.bsp`, `deltat.data`, `deltat.preds` and
//! `Leap_Second.dat`. Some of these are published with a limited validity, so
//! every call to [`get_data_path`] first compares the bundled expiration table
//! against today's date and reports files that have expired or will expire
//! within the given number of days. Reports are advisory: they are returned as
//! [`Diagnostics`] and logged through `tracing`, never raised as errors.

mod consts;
mod diagnostics;
mod prelude;
mod table;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use diagnostics::{Diagnostics, Warning};
pub use table::{ExpirationEntry, ExpirationTable};
pub use types::ExpirationLimit;

use chrono::NaiveDate;
use std::convert::Infallible;
use std::path::{Path, PathBuf};

/// Error returned by the public entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpirationError {
    /// The expiration limit is not a strictly positive number of days.
    #[error("Invalid expiration limit: {0} (must be a positive integer number of days)")]
    InvalidArgument(String),
}

impl From<Infallible> for ExpirationError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Validates the limit, checks `table` against `today` and emits every warning.
pub(crate) fn check_table<L>(
    table: &ExpirationTable,
    expiration_limit: L,
    today: NaiveDate,
) -> Result<Diagnostics, ExpirationError>
where
    L: TryInto<ExpirationLimit>,
    ExpirationError: From<L::Error>,
{
    let limit: ExpirationLimit = expiration_limit.try_into()?;
    let diagnostics = table.check(limit, today);
    diagnostics.emit();
    Ok(diagnostics)
}

pub(crate) fn data_path_for<L>(
    table: &ExpirationTable,
    expiration_limit: L,
    today: NaiveDate,
) -> Result<PathBuf, ExpirationError>
where
    L: TryInto<ExpirationLimit>,
    ExpirationError: From<L::Error>,
{
    check_table(table, expiration_limit, today)?;
    Ok(data_dir().to_path_buf())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Checks the bundled files against today's date.
///
/// Accepts an integer, an `Option<i64>` or an already validated
/// [`ExpirationLimit`]. `None`, zero, negative values and strings are rejected.
/// Every expired or soon to expire file is logged as a `tracing` warning and
/// returned.
///
/// # Errors
/// Returns `ExpirationError::InvalidArgument` if the limit is not a positive integer.
pub fn check_expirations<L>(expiration_limit: L) -> Result<Diagnostics, ExpirationError>
where
    L: TryInto<ExpirationLimit>,
    ExpirationError: From<L::Error>,
{
    check_table(ExpirationTable::bundled(), expiration_limit, today())
}

/// Returns the bundled data directory after running [`check_expirations`].
///
/// The path is returned whether or not warnings were emitted.
///
/// # Errors
/// Returns `ExpirationError::InvalidArgument` if the limit is not a positive integer.
pub fn get_data_path<L>(expiration_limit: L) -> Result<PathBuf, ExpirationError>
where
    L: TryInto<ExpirationLimit>,
    ExpirationError: From<L::Error>,
{
    data_path_for(ExpirationTable::bundled(), expiration_limit, today())
}

/// The bundled data directory, without any expiration check
pub fn data_dir() -> &'static Path {
    Path::new(DATA_DIR)
}

/// Path of a bundled data file, or `None` if the crate does not ship it
pub fn data_file_path(file: &str) -> Option<PathBuf> {
    ExpirationTable::bundled()
        .contains(file)
        .then(|| data_dir().join(file))
}
