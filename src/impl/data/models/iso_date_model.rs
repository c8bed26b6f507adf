use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Stores written by tools that keep a time part on date columns use
        // the second form; the time is always midnight and gets dropped.
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}
impl fmt::Display for ISODateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
impl From<NaiveDate> for ISODateModel {
    fn from(d: NaiveDate) -> Self {
        ISODateModel(d)
    }
}
impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_and_timestamped_dates() {
        let plain: NaiveDate = "2024-03-05".parse::<ISODateModel>().unwrap().into();
        let stamped: NaiveDate = "2024-03-05 00:00:00".parse::<ISODateModel>().unwrap().into();
        assert_eq!(plain, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(plain, stamped);
    }

    #[test]
    fn test_rejects_non_iso_dates() {
        assert!("05/03/2024".parse::<ISODateModel>().is_err());
        assert!("".parse::<ISODateModel>().is_err());
    }

    #[test]
    fn test_displays_iso_format() {
        let d = ISODateModel::from(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());
        assert_eq!(d.to_string(), "2023-11-02");
    }
}
