//! Daily key module
//!
//! A `DateKey` is the UTC calendar date in `YYYY-MM-DD` form. It names the
//! remote image for the day and is the value remembered in the state file.
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WallpaperError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Render an instant as a key, always in UTC
    pub fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from_date(instant.with_timezone(&Utc).date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Today's key under UTC, whatever the host time zone
pub fn today() -> DateKey {
    DateKey::from_datetime(&Utc::now())
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| WallpaperError::Config(format!("Invalid date '{}': {}", s, e)))?;
        let key = Self::from_date(date);
        // chrono accepts unpadded fields; the key must round-trip exactly
        if key.as_str() != s {
            return Err(WallpaperError::Config(format!(
                "Invalid date '{}': expected YYYY-MM-DD",
                s
            )));
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_today_is_stable() {
        let first = today();
        let second = today();
        // Only differs if the test straddles midnight UTC
        assert!(second >= first);
        assert_eq!(first.as_str().len(), 10);
    }

    #[test]
    fn test_from_datetime_ignores_local_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let tokyo = utc.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
        let honolulu = utc.with_timezone(&FixedOffset::west_opt(10 * 3600).unwrap());

        assert_eq!(DateKey::from_datetime(&utc).as_str(), "2024-03-01");
        assert_eq!(DateKey::from_datetime(&tokyo).as_str(), "2024-03-01");
        assert_eq!(DateKey::from_datetime(&honolulu).as_str(), "2024-03-01");
    }

    #[test]
    fn test_same_utc_day_same_key() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();

        assert_eq!(DateKey::from_datetime(&morning), DateKey::from_datetime(&night));
        assert!(DateKey::from_datetime(&next) > DateKey::from_datetime(&night));
    }

    #[test]
    fn test_zero_padding() {
        let date = NaiveDate::from_ymd_opt(812, 1, 5).unwrap();
        assert_eq!(DateKey::from_date(date).as_str(), "0812-01-05");
    }

    #[test]
    fn test_parse_valid() {
        let key: DateKey = "2024-02-29".parse().unwrap();
        assert_eq!(key.to_string(), "2024-02-29");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("2023-02-29".parse::<DateKey>().is_err());
        assert!("2024-3-1".parse::<DateKey>().is_err());
        assert!("yesterday".parse::<DateKey>().is_err());
    }
}
