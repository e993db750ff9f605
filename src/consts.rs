/// Default warning window, in days, used when the caller has no preference
pub const DEFAULT_EXPIRATION_LIMIT: u32 = 30;

/// Name of the directory holding the bundled data files
pub const DATA_DIR_NAME: &str = "data";

/// Absolute path of the bundled data directory, fixed at build time.
/// Must end with `DATA_DIR_NAME`; `concat!` only takes literals.
pub(crate) const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// JPL planetary ephemeris (covers 1900-2050)
pub const DE421_BSP: &str = "de421.bsp";
/// Historical Delta T measurements
pub const DELTAT_DATA: &str = "deltat.data";
/// Delta T predictions
pub const DELTAT_PREDS: &str = "deltat.preds";
/// IERS leap second announcements
pub const LEAP_SECOND_DAT: &str = "Leap_Second.dat";
