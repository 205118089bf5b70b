//! Serde helpers for `HH:MM` time-of-day strings.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%H:%M";

/// Truncates a time to whole minutes.
pub fn to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&t.format(FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(d)?;
    NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
}

pub mod option {
    use super::FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.collect_str(&t.format(FORMAT)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|raw| NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Shift {
        #[serde(with = "crate::utils::time_format")]
        start: NaiveTime,
        #[serde(with = "crate::utils::time_format::option")]
        end: Option<NaiveTime>,
    }

    #[test]
    fn writes_hours_and_minutes_only() {
        let shift = Shift {
            start: NaiveTime::from_hms_opt(9, 5, 42).unwrap(),
            end: None,
        };
        let json = serde_json::to_string(&shift).unwrap();
        assert_eq!(json, r#"{"start":"09:05","end":null}"#);
    }

    #[test]
    fn rejects_seconds_and_garbage() {
        assert!(serde_json::from_str::<Shift>(r#"{"start":"9am","end":null}"#).is_err());
        assert!(serde_json::from_str::<Shift>(r#"{"start":"09:00","end":"25:00"}"#).is_err());
    }

    #[test]
    fn to_minute_drops_seconds() {
        let t = NaiveTime::from_hms_milli_opt(17, 40, 59, 999).unwrap();
        assert_eq!(to_minute(t), NaiveTime::from_hms_opt(17, 40, 0).unwrap());
    }
}
