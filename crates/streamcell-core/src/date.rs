//! Spreadsheet date serials
//!
//! Notes:
//! - Dates are stored as serial numbers (days since a base date), with the
//!   time of day in the fractional part.
//! - In the 1900 date system the serial keeps the historical "1900 leap year"
//!   bug: serial 60 is the non-existent 1900-02-29, which lands on 1900-03-01
//!   here, the same day as serial 61.
//! - In the 1904 date system serial 0 is 1904-01-01.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// First serial counted from 1899-12-30 instead of 1899-12-31
const FIRST_SERIAL_AFTER_LEAP_BUG: i64 = 61;

/// The workbook's date epoch
///
/// This is a workbook-wide setting (`<workbookPr date1904="1"/>`), so it is
/// passed into every conversion rather than read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSystem {
    /// Serial 1 = 1900-01-01 (default)
    #[default]
    Excel1900,
    /// Serial 0 = 1904-01-01
    Excel1904,
}

impl DateSystem {
    /// Pick the date system from the workbook's `date1904` flag
    pub fn from_1904_flag(use_1904: bool) -> Self {
        if use_1904 {
            DateSystem::Excel1904
        } else {
            DateSystem::Excel1900
        }
    }

    /// Check if this is the 1904 date system
    pub fn is_1904(&self) -> bool {
        matches!(self, DateSystem::Excel1904)
    }
}

/// Convert a date serial into a wall-clock date and time
///
/// Returns `None` for negative, non-finite or out-of-range serials.
pub fn serial_to_datetime(serial: f64, system: DateSystem) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > i32::MAX as f64 {
        return None;
    }

    let whole_days = serial.floor();
    let millis_in_day = ((serial - whole_days) * MILLIS_PER_DAY + 0.5) as i64;
    let whole_days = whole_days as i64;

    let base = match system {
        DateSystem::Excel1904 => NaiveDate::from_ymd_opt(1904, 1, 1)?,
        DateSystem::Excel1900 if whole_days < FIRST_SERIAL_AFTER_LEAP_BUG => {
            NaiveDate::from_ymd_opt(1899, 12, 31)?
        }
        DateSystem::Excel1900 => NaiveDate::from_ymd_opt(1899, 12, 30)?,
    };

    let date = base.checked_add_signed(Duration::days(whole_days))?;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::milliseconds(millis_in_day))
}

/// Interpret a wall-clock date and time in the local time zone
///
/// An ambiguous wall time (DST overlap) resolves to the earlier instant. A
/// wall time inside a DST gap is pushed forward one hour.
pub fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            log::trace!("{naive} falls in a DST gap, shifting forward");
            Local
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .unwrap_or_else(|| Local.from_utc_datetime(&naive))
        }
    }
}
