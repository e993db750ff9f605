use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    DE421_BSP, DELTAT_DATA, DELTAT_PREDS, Diagnostics, ExpirationLimit, LEAP_SECOND_DAT, Warning,
};

/// Builds a date at compile time; an invalid date fails the build.
pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid expiration date in bundled table"),
    }
}

/// Expiration dates of the files shipped in the data directory.
/// Refreshed together with the data files themselves.
const BUNDLED_EXPIRATIONS: [(&str, NaiveDate); 4] = [
    (DE421_BSP, ymd(2053, 10, 8)),
    (DELTAT_DATA, ymd(2027, 7, 1)),
    (DELTAT_PREDS, ymd(2027, 7, 1)),
    (LEAP_SECOND_DAT, ymd(2027, 6, 28)),
];

static BUNDLED: LazyLock<ExpirationTable> =
    LazyLock::new(|| BUNDLED_EXPIRATIONS.iter().copied().collect());

/// One row of an [`ExpirationTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpirationEntry<'a> {
    pub file: &'a str,
    pub expires_on: NaiveDate,
}

impl ExpirationEntry<'_> {
    /// Signed number of whole days between `today` and the expiration date.
    /// Negative once the date has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        self.expires_on.signed_duration_since(today).num_days()
    }

    /// Classifies this entry against `today`, returning a warning if it is
    /// expired or expires within `limit` days (inclusive).
    pub fn evaluate(&self, limit: ExpirationLimit, today: NaiveDate) -> Option<Warning> {
        let remaining = self.days_remaining(today);
        if remaining < 0 {
            Some(Warning::Expired {
                file: self.file.to_owned(),
                expires_on: self.expires_on,
            })
        } else if remaining <= i64::from(limit.get()) {
            Some(Warning::ExpiringSoon {
                file: self.file.to_owned(),
                expires_on: self.expires_on,
                limit,
            })
        } else {
            None
        }
    }
}

/// Mapping of data file name to the date after which it should be refreshed.
///
/// Serializes as a JSON object of `"file": "YYYY-MM-DD"` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpirationTable(BTreeMap<String, NaiveDate>);

impl ExpirationTable {
    /// The table describing the files bundled with this crate
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    pub fn get(&self, file: &str) -> Option<NaiveDate> {
        self.0.get(file).copied()
    }

    pub fn contains(&self, file: &str) -> bool {
        self.0.contains_key(file)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in file name order
    pub fn iter(&self) -> impl Iterator<Item = ExpirationEntry<'_>> {
        self.0.iter().map(|(file, &expires_on)| ExpirationEntry {
            file: file.as_str(),
            expires_on,
        })
    }

    /// Compares every entry against `today` and collects a warning for each
    /// file that is expired or expires within `limit` days.
    pub fn check(&self, limit: ExpirationLimit, today: NaiveDate) -> Diagnostics {
        let mut diagnostics = Diagnostics::default();
        for warning in self.iter().filter_map(|entry| entry.evaluate(limit, today)) {
            diagnostics.push(warning);
        }
        debug!(
            files = self.len(),
            warnings = diagnostics.len(),
            %limit,
            %today,
            "checked data file expirations"
        );
        diagnostics
    }
}

impl<S: Into<String>> FromIterator<(S, NaiveDate)> for ExpirationTable {
    fn from_iter<I: IntoIterator<Item = (S, NaiveDate)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(file, expires_on)| (file.into(), expires_on))
                .collect(),
        )
    }
}
