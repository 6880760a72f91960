// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use serde::{Deserialize, Serialize};

use crate::{
	util::BitVec,
	value::{
		Date, DateTime, Duration, Time, Value,
		container::{BoolContainer, DecimalContainer, NumberContainer, StringContainer, TemporalContainer, UndefinedContainer},
		r#type::{TimeUnit, Type},
	},
};

/// The physical buffer of one column: a closed dispatch over the per-family
/// containers. Variants whose logical type is parameterized carry the
/// parameters here, so `get_type` reproduces the full logical type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Utf8(StringContainer),
	Date(TemporalContainer<Date>),
	DateTime {
		container: TemporalContainer<DateTime>,
		unit: TimeUnit,
		timezone: Option<String>,
	},
	Time(TemporalContainer<Time>),
	Duration {
		container: TemporalContainer<Duration>,
		unit: TimeUnit,
	},
	Decimal {
		container: DecimalContainer,
		scale: u8,
	},
	// special case: all undefined, no committed type
	Undefined(UndefinedContainer),
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Date(_) => Type::Date,
			ColumnData::DateTime {
				unit,
				timezone,
				..
			} => Type::DateTime {
				unit: *unit,
				timezone: timezone.clone(),
			},
			ColumnData::Time(_) => Type::Time,
			ColumnData::Duration {
				unit,
				..
			} => Type::Duration {
				unit: *unit,
			},
			ColumnData::Decimal {
				scale,
				..
			} => Type::Decimal {
				scale: *scale,
			},
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Float4(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Int1(container) => container.len(),
			ColumnData::Int2(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Int16(container) => container.len(),
			ColumnData::Uint1(container) => container.len(),
			ColumnData::Uint2(container) => container.len(),
			ColumnData::Uint4(container) => container.len(),
			ColumnData::Uint8(container) => container.len(),
			ColumnData::Uint16(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Date(container) => container.len(),
			ColumnData::DateTime {
				container,
				..
			} => container.len(),
			ColumnData::Time(container) => container.len(),
			ColumnData::Duration {
				container,
				..
			} => container.len(),
			ColumnData::Decimal {
				container,
				..
			} => container.len(),
			ColumnData::Undefined(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_defined(index),
			ColumnData::Float4(container) => container.is_defined(index),
			ColumnData::Float8(container) => container.is_defined(index),
			ColumnData::Int1(container) => container.is_defined(index),
			ColumnData::Int2(container) => container.is_defined(index),
			ColumnData::Int4(container) => container.is_defined(index),
			ColumnData::Int8(container) => container.is_defined(index),
			ColumnData::Int16(container) => container.is_defined(index),
			ColumnData::Uint1(container) => container.is_defined(index),
			ColumnData::Uint2(container) => container.is_defined(index),
			ColumnData::Uint4(container) => container.is_defined(index),
			ColumnData::Uint8(container) => container.is_defined(index),
			ColumnData::Uint16(container) => container.is_defined(index),
			ColumnData::Utf8(container) => container.is_defined(index),
			ColumnData::Date(container) => container.is_defined(index),
			ColumnData::DateTime {
				container,
				..
			} => container.is_defined(index),
			ColumnData::Time(container) => container.is_defined(index),
			ColumnData::Duration {
				container,
				..
			} => container.is_defined(index),
			ColumnData::Decimal {
				container,
				..
			} => container.is_defined(index),
			ColumnData::Undefined(_) => false,
		}
	}

	pub fn is_fully_defined(&self) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_fully_defined(),
			ColumnData::Float4(container) => container.is_fully_defined(),
			ColumnData::Float8(container) => container.is_fully_defined(),
			ColumnData::Int1(container) => container.is_fully_defined(),
			ColumnData::Int2(container) => container.is_fully_defined(),
			ColumnData::Int4(container) => container.is_fully_defined(),
			ColumnData::Int8(container) => container.is_fully_defined(),
			ColumnData::Int16(container) => container.is_fully_defined(),
			ColumnData::Uint1(container) => container.is_fully_defined(),
			ColumnData::Uint2(container) => container.is_fully_defined(),
			ColumnData::Uint4(container) => container.is_fully_defined(),
			ColumnData::Uint8(container) => container.is_fully_defined(),
			ColumnData::Uint16(container) => container.is_fully_defined(),
			ColumnData::Utf8(container) => container.is_fully_defined(),
			ColumnData::Date(container) => container.is_fully_defined(),
			ColumnData::DateTime {
				container,
				..
			} => container.is_fully_defined(),
			ColumnData::Time(container) => container.is_fully_defined(),
			ColumnData::Duration {
				container,
				..
			} => container.is_fully_defined(),
			ColumnData::Decimal {
				container,
				..
			} => container.is_fully_defined(),
			ColumnData::Undefined(container) => container.is_empty(),
		}
	}

	/// The validity bitmap. An `Undefined` column has no buffer to track
	/// validity for; callers dispatch on the variant before asking.
	pub fn bitvec(&self) -> &BitVec {
		match self {
			ColumnData::Bool(container) => container.bitvec(),
			ColumnData::Float4(container) => container.bitvec(),
			ColumnData::Float8(container) => container.bitvec(),
			ColumnData::Int1(container) => container.bitvec(),
			ColumnData::Int2(container) => container.bitvec(),
			ColumnData::Int4(container) => container.bitvec(),
			ColumnData::Int8(container) => container.bitvec(),
			ColumnData::Int16(container) => container.bitvec(),
			ColumnData::Uint1(container) => container.bitvec(),
			ColumnData::Uint2(container) => container.bitvec(),
			ColumnData::Uint4(container) => container.bitvec(),
			ColumnData::Uint8(container) => container.bitvec(),
			ColumnData::Uint16(container) => container.bitvec(),
			ColumnData::Utf8(container) => container.bitvec(),
			ColumnData::Date(container) => container.bitvec(),
			ColumnData::DateTime {
				container,
				..
			} => container.bitvec(),
			ColumnData::Time(container) => container.bitvec(),
			ColumnData::Duration {
				container,
				..
			} => container.bitvec(),
			ColumnData::Decimal {
				container,
				..
			} => container.bitvec(),
			ColumnData::Undefined(_) => unreachable!("undefined columns have no validity bitmap"),
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get_value(index),
			ColumnData::Float4(container) => container.get_value(index),
			ColumnData::Float8(container) => container.get_value(index),
			ColumnData::Int1(container) => container.get_value(index),
			ColumnData::Int2(container) => container.get_value(index),
			ColumnData::Int4(container) => container.get_value(index),
			ColumnData::Int8(container) => container.get_value(index),
			ColumnData::Int16(container) => container.get_value(index),
			ColumnData::Uint1(container) => container.get_value(index),
			ColumnData::Uint2(container) => container.get_value(index),
			ColumnData::Uint4(container) => container.get_value(index),
			ColumnData::Uint8(container) => container.get_value(index),
			ColumnData::Uint16(container) => container.get_value(index),
			ColumnData::Utf8(container) => container.get_value(index),
			ColumnData::Date(container) => container.get_value(index),
			ColumnData::DateTime {
				container,
				..
			} => container.get_value(index),
			ColumnData::Time(container) => container.get_value(index),
			ColumnData::Duration {
				container,
				..
			} => container.get_value(index),
			ColumnData::Decimal {
				container,
				..
			} => container.get_value(index),
			ColumnData::Undefined(container) => container.get_value(index),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		match self {
			ColumnData::Bool(container) => container.as_string(index),
			ColumnData::Float4(container) => container.as_string(index),
			ColumnData::Float8(container) => container.as_string(index),
			ColumnData::Int1(container) => container.as_string(index),
			ColumnData::Int2(container) => container.as_string(index),
			ColumnData::Int4(container) => container.as_string(index),
			ColumnData::Int8(container) => container.as_string(index),
			ColumnData::Int16(container) => container.as_string(index),
			ColumnData::Uint1(container) => container.as_string(index),
			ColumnData::Uint2(container) => container.as_string(index),
			ColumnData::Uint4(container) => container.as_string(index),
			ColumnData::Uint8(container) => container.as_string(index),
			ColumnData::Uint16(container) => container.as_string(index),
			ColumnData::Utf8(container) => container.as_string(index),
			ColumnData::Date(container) => container.as_string(index),
			ColumnData::DateTime {
				container,
				..
			} => container.as_string(index),
			ColumnData::Time(container) => container.as_string(index),
			ColumnData::Duration {
				container,
				..
			} => container.as_string(index),
			ColumnData::Decimal {
				container,
				..
			} => container.as_string(index),
			ColumnData::Undefined(container) => container.as_string(index),
		}
	}

	/// Allocate an empty buffer of the given logical type. The single
	/// output allocation of every operator goes through here.
	pub fn with_capacity(ty: &Type, capacity: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(StringContainer::with_capacity(capacity)),
			Type::Date => ColumnData::Date(TemporalContainer::with_capacity(capacity)),
			Type::DateTime {
				unit,
				timezone,
			} => ColumnData::DateTime {
				container: TemporalContainer::with_capacity(capacity),
				unit: *unit,
				timezone: timezone.clone(),
			},
			Type::Time => ColumnData::Time(TemporalContainer::with_capacity(capacity)),
			Type::Duration {
				unit,
			} => ColumnData::Duration {
				container: TemporalContainer::with_capacity(capacity),
				unit: *unit,
			},
			Type::Decimal {
				scale,
			} => ColumnData::Decimal {
				container: DecimalContainer::with_capacity(capacity),
				scale: *scale,
			},
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::r#type::TimeUnit;

	#[test]
	fn test_get_type_roundtrips_through_with_capacity() {
		let types = [
			Type::Boolean,
			Type::Float4,
			Type::Float8,
			Type::Int1,
			Type::Int16,
			Type::Uint8,
			Type::Utf8,
			Type::Date,
			Type::DateTime {
				unit: TimeUnit::Microsecond,
				timezone: Some("Asia/Kathmandu".to_string()),
			},
			Type::Time,
			Type::Duration {
				unit: TimeUnit::Millisecond,
			},
			Type::Decimal {
				scale: 2,
			},
			Type::Undefined,
		];
		for ty in types {
			let data = ColumnData::with_capacity(&ty, 4);
			assert_eq!(data.get_type(), ty);
			assert!(data.is_empty());
		}
	}

	#[test]
	fn test_undefined_is_never_defined() {
		let data = ColumnData::Undefined(UndefinedContainer::new(3));
		assert_eq!(data.len(), 3);
		assert!(!data.is_defined(0));
		assert_eq!(data.get_value(0), Value::Undefined);
	}

	#[test]
	fn test_datetime_variant_keeps_metadata() {
		let ty = Type::DateTime {
			unit: TimeUnit::Millisecond,
			timezone: None,
		};
		let data = ColumnData::with_capacity(&ty, 0);
		assert_eq!(data.get_type(), ty);
	}
}
