// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::value::{
	date::{Date, parse_date},
	time::{NANOS_PER_DAY, Time, parse_time},
};

/// An absolute instant with nanosecond precision, stored as nanoseconds
/// since the Unix epoch in UTC. Any time zone a column carries lives on the
/// column's `Type`; the instant itself is zone-independent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	nanos: i64,
}

impl DateTime {
	pub fn new(date: Date, time: Time) -> Option<Self> {
		let day_nanos = i64::from(date.to_days()).checked_mul(NANOS_PER_DAY as i64)?;
		Some(Self {
			nanos: day_nanos.checked_add(time.to_nanos() as i64)?,
		})
	}

	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		Self::new(Date::new(year, month, day)?, Time::from_hms(hour, minute, second)?)
	}

	pub fn from_timestamp_nanos(nanos: i64) -> Self {
		Self {
			nanos,
		}
	}

	pub fn from_timestamp_micros(micros: i64) -> Option<Self> {
		Some(Self {
			nanos: micros.checked_mul(1_000)?,
		})
	}

	pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
		Some(Self {
			nanos: millis.checked_mul(1_000_000)?,
		})
	}

	pub fn to_nanos(&self) -> i64 {
		self.nanos
	}

	pub fn date(&self) -> Date {
		let days = self.nanos.div_euclid(NANOS_PER_DAY as i64);
		// Day count of any representable i64 instant fits i32.
		Date::from_days(days as i32).unwrap_or_default()
	}

	pub fn time(&self) -> Time {
		let nanos = self.nanos.rem_euclid(NANOS_PER_DAY as i64) as u64;
		Time::from_nanos(nanos).unwrap_or_default()
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}T{}Z", self.date(), self.time())
	}
}

// ISO 8601 on the wire
impl Serialize for DateTime {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

struct DateTimeVisitor;

impl Visitor<'_> for DateTimeVisitor {
	type Value = DateTime;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a datetime in ISO 8601 format (YYYY-MM-DDTHH:MM:SS[.fraction]Z)")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<DateTime, E> {
		let invalid = || E::custom(format!("invalid datetime: {}", value));
		let value = value.strip_suffix('Z').unwrap_or(value);
		let (date, time) = value.split_once('T').ok_or_else(invalid)?;
		let date = parse_date(date).ok_or_else(invalid)?;
		let time = parse_time(time).ok_or_else(invalid)?;
		DateTime::new(date, time).ok_or_else(invalid)
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_str(DateTimeVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		let datetime = DateTime::from_ymd_hms(1970, 1, 1, 0, 0, 0).unwrap();
		assert_eq!(datetime.to_nanos(), 0);
		assert_eq!(datetime, DateTime::default());
	}

	#[test]
	fn test_known_instant() {
		// 2020-01-01T00:00:00Z
		let datetime = DateTime::from_ymd_hms(2020, 1, 1, 0, 0, 0).unwrap();
		assert_eq!(datetime.to_nanos(), 1_577_836_800 * 1_000_000_000);
		assert_eq!(DateTime::from_timestamp_millis(1_577_836_800_000).unwrap(), datetime);
		assert_eq!(DateTime::from_timestamp_micros(1_577_836_800_000_000).unwrap(), datetime);
	}

	#[test]
	fn test_date_and_time_parts() {
		let datetime = DateTime::from_ymd_hms(2020, 6, 15, 13, 30, 45).unwrap();
		assert_eq!(datetime.date(), Date::new(2020, 6, 15).unwrap());
		assert_eq!(datetime.time(), Time::from_hms(13, 30, 45).unwrap());
	}

	#[test]
	fn test_before_epoch() {
		let datetime = DateTime::from_ymd_hms(1969, 12, 31, 23, 0, 0).unwrap();
		assert!(datetime.to_nanos() < 0);
		assert_eq!(datetime.date(), Date::new(1969, 12, 31).unwrap());
		assert_eq!(datetime.time(), Time::from_hms(23, 0, 0).unwrap());
	}

	#[test]
	fn test_display() {
		let datetime = DateTime::from_ymd_hms(2020, 1, 1, 12, 0, 0).unwrap();
		assert_eq!(datetime.to_string(), "2020-01-01T12:00:00Z");
	}

	#[test]
	fn test_serde_roundtrip() {
		let datetime = DateTime::from_ymd_hms(2024, 2, 29, 6, 30, 15).unwrap();
		let json = serde_json::to_string(&datetime).unwrap();
		assert_eq!(json, "\"2024-02-29T06:30:15Z\"");

		let recovered: DateTime = serde_json::from_str(&json).unwrap();
		assert_eq!(datetime, recovered);
	}
}
