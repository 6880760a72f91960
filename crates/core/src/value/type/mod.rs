// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Native resolution of a temporal column. Dates always tick in whole days
/// and `Time` in nanoseconds since midnight, so neither carries a unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
	Millisecond,
	Microsecond,
	Nanosecond,
}

impl TimeUnit {
	pub fn nanos_per_tick(&self) -> i64 {
		match self {
			TimeUnit::Millisecond => 1_000_000,
			TimeUnit::Microsecond => 1_000,
			TimeUnit::Nanosecond => 1,
		}
	}
}

impl Display for TimeUnit {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TimeUnit::Millisecond => f.write_str("ms"),
			TimeUnit::Microsecond => f.write_str("us"),
			TimeUnit::Nanosecond => f.write_str("ns"),
		}
	}
}

/// The logical type of a column. A closed enum: every operator dispatches
/// over it exhaustively, so an unsupported family is a compile-visible match
/// arm, never a silent fallthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
	/// Type of a column holding only undefined values
	Undefined,
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A UTF-8 encoded text
	Utf8,
	/// A calendar date, stored as days since the Unix epoch
	Date,
	/// An instant with a tick unit and an optional time zone name. The
	/// zone is carried opaquely; values are absolute instants either way.
	DateTime {
		unit: TimeUnit,
		timezone: Option<String>,
	},
	/// A time of day, stored as nanoseconds since midnight
	Time,
	/// A signed span of time with a tick unit
	Duration {
		unit: TimeUnit,
	},
	/// A fixed-point decimal with `scale` fractional digits
	Decimal {
		scale: u8,
	},
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Type::Float4
				| Type::Float8 | Type::Int1 | Type::Int2
				| Type::Int4 | Type::Int8 | Type::Int16
				| Type::Uint1 | Type::Uint2 | Type::Uint4
				| Type::Uint8 | Type::Uint16
		)
	}

	pub fn is_integer(&self) -> bool {
		matches!(
			self,
			Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16 | Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16
		)
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(
			self,
			Type::Date | Type::DateTime {
				..
			} | Type::Time | Type::Duration {
				..
			}
		)
	}

	pub fn is_decimal(&self) -> bool {
		matches!(
			self,
			Type::Decimal {
				..
			}
		)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Date => f.write_str("Date"),
			Type::DateTime {
				unit,
				timezone: None,
			} => write!(f, "DateTime({})", unit),
			Type::DateTime {
				unit,
				timezone: Some(timezone),
			} => write!(f, "DateTime({}, {})", unit, timezone),
			Type::Time => f.write_str("Time"),
			Type::Duration {
				unit,
			} => write!(f, "Duration({})", unit),
			Type::Decimal {
				scale,
			} => write!(f, "Decimal({})", scale),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_family_predicates() {
		assert!(Type::Int4.is_number());
		assert!(Type::Int4.is_integer());
		assert!(!Type::Int4.is_float());
		assert!(Type::Float4.is_float());
		assert!(Type::Date.is_temporal());
		assert!(
			Type::Duration {
				unit: TimeUnit::Millisecond
			}
			.is_temporal()
		);
		assert!(
			Type::Decimal {
				scale: 2
			}
			.is_decimal()
		);
		assert!(!Type::Utf8.is_number());
		assert!(!Type::Boolean.is_temporal());
	}

	#[test]
	fn test_display() {
		assert_eq!(Type::Float8.to_string(), "Float8");
		assert_eq!(
			Type::DateTime {
				unit: TimeUnit::Microsecond,
				timezone: Some("Asia/Kathmandu".to_string()),
			}
			.to_string(),
			"DateTime(us, Asia/Kathmandu)"
		);
		assert_eq!(
			Type::Duration {
				unit: TimeUnit::Millisecond
			}
			.to_string(),
			"Duration(ms)"
		);
		assert_eq!(
			Type::Decimal {
				scale: 2
			}
			.to_string(),
			"Decimal(2)"
		);
	}

	#[test]
	fn test_nanos_per_tick() {
		assert_eq!(TimeUnit::Millisecond.nanos_per_tick(), 1_000_000);
		assert_eq!(TimeUnit::Microsecond.nanos_per_tick(), 1_000);
		assert_eq!(TimeUnit::Nanosecond.nanos_per_tick(), 1);
	}
}
