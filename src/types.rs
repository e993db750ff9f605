use crate::ExpirationError;
use crate::consts::DEFAULT_EXPIRATION_LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Number of days before expiration at which a bundled file starts being reported.
/// Uses `NonZeroU32` internally, so 0 is not a valid limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ExpirationLimit(NonZeroU32);

impl ExpirationLimit {
    /// Creates a new limit, validating that it is strictly positive
    ///
    /// # Errors
    /// Returns `ExpirationError::InvalidArgument` if the value is 0, negative or above `u32::MAX`.
    pub fn new(days: i64) -> Result<Self, ExpirationError> {
        u32::try_from(days)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| ExpirationError::InvalidArgument(days.to_string()))
    }

    /// Returns the limit in days
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for ExpirationLimit {
    fn default() -> Self {
        Self(NonZeroU32::MIN.saturating_add(DEFAULT_EXPIRATION_LIMIT - 1))
    }
}

impl TryFrom<i64> for ExpirationLimit {
    type Error = ExpirationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for ExpirationLimit {
    type Error = ExpirationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl TryFrom<u32> for ExpirationLimit {
    type Error = ExpirationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl TryFrom<Option<i64>> for ExpirationLimit {
    type Error = ExpirationError;

    fn try_from(value: Option<i64>) -> Result<Self, Self::Error> {
        value.map_or_else(
            || Err(ExpirationError::InvalidArgument("None".to_owned())),
            Self::new,
        )
    }
}

/// Text is never a limit, even when it holds digits.
impl TryFrom<&str> for ExpirationLimit {
    type Error = ExpirationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Err(ExpirationError::InvalidArgument(format!("{value:?}")))
    }
}

impl From<ExpirationLimit> for u32 {
    fn from(limit: ExpirationLimit) -> Self {
        limit.0.get()
    }
}

impl fmt::Display for ExpirationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_new_valid() {
        assert_eq!(ExpirationLimit::new(1).unwrap().get(), 1);
        assert_eq!(ExpirationLimit::new(40).unwrap().get(), 40);
        assert_eq!(ExpirationLimit::new(i64::from(u32::MAX)).unwrap().get(), u32::MAX);
    }

    #[test]
    fn test_limit_new_invalid() {
        for days in [0, -1, -30, i64::MIN, i64::from(u32::MAX) + 1] {
            let result = ExpirationLimit::new(days);
            assert!(
                matches!(result, Err(ExpirationError::InvalidArgument(_))),
                "Expected InvalidArgument for {days}"
            );
        }
    }

    #[test]
    fn test_limit_default() {
        assert_eq!(ExpirationLimit::default().get(), DEFAULT_EXPIRATION_LIMIT);
        assert_eq!(ExpirationLimit::default().get(), 30);
    }

    #[test]
    fn test_limit_try_from_option() {
        let none: Option<i64> = None;
        assert!(matches!(
            ExpirationLimit::try_from(none),
            Err(ExpirationError::InvalidArgument(ref msg)) if msg == "None"
        ));
        assert_eq!(ExpirationLimit::try_from(Some(15_i64)).unwrap().get(), 15);
        assert!(ExpirationLimit::try_from(Some(0_i64)).is_err());
    }

    #[test]
    fn test_limit_rejects_strings() {
        for text in ["bad", "40", " 7 ", "1.5", "-3", ""] {
            let expected = ExpirationError::InvalidArgument(format!("{text:?}"));
            assert_eq!(ExpirationLimit::try_from(text), Err(expected));
        }
    }

    #[test]
    fn test_limit_display() {
        assert_eq!(ExpirationLimit::new(40).unwrap().to_string(), "40");
    }

    #[test]
    fn test_limit_serde() {
        let limit: ExpirationLimit = serde_json::from_str("12").unwrap();
        assert_eq!(limit.get(), 12);
        assert_eq!(serde_json::to_string(&limit).unwrap(), "12");

        assert!(serde_json::from_str::<ExpirationLimit>("0").is_err());
        assert!(serde_json::from_str::<ExpirationLimit>("-5").is_err());
        assert!(serde_json::from_str::<ExpirationLimit>(r#""bad""#).is_err());
    }
}
