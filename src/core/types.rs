use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// Canonical `YYYY-MM-DD` day key, the sole join key between tasks and
/// calendar cells.
///
/// Keys are always built from *local* year/month/day components. Splitting a
/// UTC timestamp instead shifts dates near midnight in non-UTC timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Today's key from the local calendar, never UTC.
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input.trim(), DATE_KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| {
                Error::parse(format!(
                    "Invalid date key: '{}'. Expected format: YYYY-MM-DD.",
                    input.trim()
                ))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateKey, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Wall-clock `HH:MM` time of day. Display and sort only; never used for
/// date bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn try_from_str(input: &str) -> Result<Self> {
        NaiveTime::parse_from_str(input.trim(), CLOCK_TIME_FORMAT)
            .map(ClockTime)
            .map_err(|_| {
                Error::parse(format!(
                    "Invalid time: '{}'. Expected format: HH:MM.",
                    input.trim()
                ))
            })
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_TIME_FORMAT))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ClockTime, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// The month a calendar grid is anchored to. Fields stay private so every
/// value carries `new`'s month-range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::parse(format!(
                "Invalid month: {month}. Expected 1..=12."
            )));
        }
        Ok(MonthRef { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthRef {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthRef {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthRef {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        // Month is validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn contains(self, key: &DateKey) -> bool {
        key.date().year() == self.year && key.date().month() == self.month
    }

    /// Header label, e.g. "March 2024".
    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Month navigation direction (the prev/next header buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MonthNav {
    #[strum(serialize = "prev", serialize = "previous", to_string = "prev")]
    Prev,
    #[strum(serialize = "next", to_string = "next")]
    Next,
}

impl MonthNav {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::parse(format!(
                "Invalid month navigation: '{}'. Valid directions: {}",
                s.trim(),
                valid_csv::<MonthNav>()
            ))
        })
    }
}

/// Grid weekday, Sunday-first to match the calendar header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum DayOfWeek {
    #[strum(serialize = "sun", serialize = "sunday", to_string = "Sun")]
    Sun,
    #[strum(serialize = "mon", serialize = "monday", to_string = "Mon")]
    Mon,
    #[strum(serialize = "tue", serialize = "tuesday", to_string = "Tue")]
    Tue,
    #[strum(serialize = "wed", serialize = "wednesday", to_string = "Wed")]
    Wed,
    #[strum(serialize = "thu", serialize = "thursday", to_string = "Thu")]
    Thu,
    #[strum(serialize = "fri", serialize = "friday", to_string = "Fri")]
    Fri,
    #[strum(serialize = "sat", serialize = "saturday", to_string = "Sat")]
    Sat,
}

impl DayOfWeek {
    /// Column index in the grid, 0 = Sunday.
    pub fn grid_index(self) -> u32 {
        match self {
            DayOfWeek::Sun => 0,
            DayOfWeek::Mon => 1,
            DayOfWeek::Tue => 2,
            DayOfWeek::Wed => 3,
            DayOfWeek::Thu => 4,
            DayOfWeek::Fri => 5,
            DayOfWeek::Sat => 6,
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<DayOfWeek>()
            ))
        })
    }
}
