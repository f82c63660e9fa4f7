//! UTC timestamp utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct used to stamp generated
//! manifests with their generation time.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_millis(1_718_461_845_123);
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45.123Z");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_DAY: u64 = 86_400_000;

/// UTC datetime with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl DateTimeUtc {
    /// Current wall-clock time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Convert a `SystemTime`. Times before the epoch clamp to the epoch.
    #[allow(clippy::cast_possible_truncation)] // u64 millis covers ~584 million years
    pub fn from_system_time(time: SystemTime) -> Self {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::from_unix_millis(millis)
    }

    /// Build from milliseconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation)] // Each component is range-bounded
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_unix_millis(millis: u64) -> Self {
        let days = (millis / MILLIS_PER_DAY) as i64;
        let rem = millis % MILLIS_PER_DAY;
        let (year, month, day) = civil_from_days(days);

        Self {
            year: year as u16,
            month,
            day,
            hour: (rem / 3_600_000) as u8,
            minute: (rem / 60_000 % 60) as u8,
            second: (rem / 1_000 % 60) as u8,
            millisecond: (rem % 1_000) as u16,
        }
    }

    /// Format as RFC 3339 (ISO 8601) with milliseconds.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SS.mmmZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
///
/// Era-based conversion: shifts the epoch to 0000-03-01 so leap days fall
/// at the end of each 400-year cycle.
#[allow(clippy::cast_possible_truncation)] // month and day are always in 1..=31
#[allow(clippy::cast_sign_loss)]
const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}
