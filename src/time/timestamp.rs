use crate::time::error::Error;
use chrono::NaiveDateTime;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

lazy_static! {
    static ref MINUTE_REGEX: Regex = Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}$"
    )
    .expect("Regex compilation error");
}

/// Calendar date and wall-clock time with minute precision and no offset,
/// written as `YYYY-MM-DDTHH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !MINUTE_REGEX.is_match(s) {
            return Err(Error::Syntax(format!(
                "'{}' is not a timestamp of form YYYY-MM-DDTHH:mm",
                s
            )));
        }
        NaiveDateTime::parse_from_str(s, MINUTE_FORMAT)
            .map(Timestamp)
            .map_err(|e| Error::OutOfRange(format!("'{}' is not a valid date and time: {}", s, e)))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(MINUTE_FORMAT))
    }
}

impl From<Timestamp> for NaiveDateTime {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse::<Timestamp>()
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use crate::time::error::Error;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_building_timestamp_from_string() {
        let timestamp = "2023-09-26T09:11".parse::<Timestamp>().unwrap();
        let naive = timestamp.as_naive();

        assert_eq!(naive.year(), 2023);
        assert_eq!(naive.month(), 9);
        assert_eq!(naive.day(), 26);
        assert_eq!(naive.hour(), 9);
        assert_eq!(naive.minute(), 11);
        assert_eq!(naive.second(), 0);
    }

    #[test]
    fn test_display_keeps_minute_precision() {
        let timestamp = "2023-09-25T22:19".parse::<Timestamp>().unwrap();

        assert_eq!(timestamp.to_string(), "2023-09-25T22:19");
    }

    #[test]
    fn test_rejects_malformed_literals() {
        for value in &[
            "",
            "2023-09-26",
            "2023-09-26 09:11",
            "2023-09-26T09:11:00",
            "2023-09-26T09:11Z",
            "23-09-26T09:11",
            "٢٠٢٣-09-26T09:11",
            "2023-０９-26T09:11",
        ] {
            match value.parse::<Timestamp>() {
                Err(Error::Syntax(_)) => {}
                other => panic!("Expected syntax error for '{}', got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for value in &["2023-13-01T00:00", "2023-02-30T10:00", "2023-09-26T25:00", "2023-09-26T09:60"] {
            match value.parse::<Timestamp>() {
                Err(Error::OutOfRange(_)) => {}
                other => panic!("Expected range error for '{}', got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_timestamps_are_ordered() {
        let earlier = "2023-09-25T22:19".parse::<Timestamp>().unwrap();
        let later = "2023-09-26T03:16".parse::<Timestamp>().unwrap();

        assert!(earlier < later);
    }

    #[test]
    fn test_serde_uses_literal_form() {
        let timestamp = "2023-09-26T14:25".parse::<Timestamp>().unwrap();
        let json = serde_json::to_string(&timestamp).unwrap();

        assert_eq!(json, "\"2023-09-26T14:25\"");
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), timestamp);
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
    }
}
