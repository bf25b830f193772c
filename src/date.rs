use chrono::NaiveDate;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// A calendar date packed as `yyyymmdd`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Date(u32);

impl Date {
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)?;
        Some(Self(year as u32 * 1_00_00 + month as u32 * 1_00 + day as u32))
    }

    pub fn year(&self) -> u16 {
        (self.0 / 1_00_00) as u16
    }

    pub fn month(&self) -> u8 {
        (self.0 / 1_00 % 1_00) as u8
    }

    pub fn day(&self) -> u8 {
        (self.0 % 1_00) as u8
    }

    pub fn as_yyyymmdd(&self) -> u32 {
        self.0
    }

    /// Accepts `yyyy-mm-dd`, an ISO date-time starting with one, or `dd/mm/yyyy`.
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        let invalid = || format!("invalid date: {value}");
        let (yyyy, mm, dd) = if value.contains('/') {
            let mut split = value.split('/');
            let dd = split.next().ok_or_else(invalid)?;
            let mm = split.next().ok_or_else(invalid)?;
            let yyyy = split.next().ok_or_else(invalid)?;
            if split.next().is_some() {
                return Err(invalid());
            }
            (yyyy, mm, dd)
        } else {
            let date = value.split('T').next().ok_or_else(invalid)?;
            let mut split = date.split('-');
            let yyyy = split.next().ok_or_else(invalid)?;
            let mm = split.next().ok_or_else(invalid)?;
            let dd = split.next().ok_or_else(invalid)?;
            if split.next().is_some() {
                return Err(invalid());
            }
            (yyyy, mm, dd)
        };
        let digits = |it: &str, min: usize, max: usize| {
            (min..=max).contains(&it.len()) && it.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(yyyy, 4, 4) || !digits(mm, 1, 2) || !digits(dd, 1, 2) {
            return Err(invalid());
        }
        let year = yyyy.parse::<u16>().map_err(|_| invalid())?;
        let month = mm.parse::<u8>().map_err(|_| invalid())?;
        let day = dd.parse::<u8>().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }

    pub fn to_iso_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// 1970-01-01, so that placeholder dates still round-trip through storage.
impl Default for Date {
    fn default() -> Self {
        Self(1970_01_01)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }
}

impl TryFrom<&str> for Date {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Date::parse(value)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

struct DateVisitor;

impl<'de> serde::de::Visitor<'de> for DateVisitor {
    type Value = Date;
    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a string representing a date")
    }
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Date::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DateVisitor)
    }
}
