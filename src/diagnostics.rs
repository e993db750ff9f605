//! Advisory warnings produced by an expiration check.
//!
//! Warnings never fail a call. They are collected into [`Diagnostics`] so the
//! caller can inspect them, and each one is also emitted as a `tracing` event.

use crate::{ExpirationLimit, prelude::*};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

/// A single bundled file that is expired or about to expire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The expiration date is strictly before today
    #[display(fmt = "The file {file} has expired.")]
    Expired { file: String, expires_on: NaiveDate },
    /// The file expires today or within the limit window
    #[display(fmt = "The file {file} would expire in less than {limit} days.")]
    ExpiringSoon {
        file: String,
        expires_on: NaiveDate,
        limit: ExpirationLimit,
    },
}

impl Warning {
    /// Name of the file the warning refers to
    pub fn file(&self) -> &str {
        match self {
            Self::Expired { file, .. } | Self::ExpiringSoon { file, .. } => file,
        }
    }

    /// Expiration date of the file
    pub const fn expires_on(&self) -> NaiveDate {
        match *self {
            Self::Expired { expires_on, .. } | Self::ExpiringSoon { expires_on, .. } => expires_on,
        }
    }

    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// Warnings collected by one check, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Warning>);

impl Diagnostics {
    pub(crate) fn push(&mut self, warning: Warning) {
        self.0.push(warning);
    }

    /// Messages of every warning, formatted with their display templates
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Number of files that are already past their expiration date
    pub fn expired_count(&self) -> usize {
        self.0.iter().filter(|w| w.is_expired()).count()
    }

    /// Sends every warning to the `tracing` warning channel.
    pub fn emit(&self) {
        for warning in &self.0 {
            warn!(
                file = warning.file(),
                expires_on = %warning.expires_on(),
                "{warning}"
            );
        }
    }

    pub fn into_inner(self) -> Vec<Warning> {
        self.0
    }
}

impl IntoIterator for Diagnostics {
    type Item = Warning;
    type IntoIter = std::vec::IntoIter<Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
