// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use crate::value::{
	Date, DateTime, Decimal, Duration, Time, Value,
	column::ColumnData,
	r#type::{TimeUnit, Type},
};

/// Typed append. Pushing a type the column cannot hold is a programming
/// error and panics; a value of the right type that is not representable
/// under the column's parameters (e.g. a decimal off the column scale)
/// degrades to an undefined row instead.
pub trait Push<T> {
	fn push(&mut self, value: T);
}

impl ColumnData {
	pub fn push_undefined(&mut self) {
		match self {
			ColumnData::Bool(container) => container.push_undefined(),
			ColumnData::Float4(container) => container.push_undefined(),
			ColumnData::Float8(container) => container.push_undefined(),
			ColumnData::Int1(container) => container.push_undefined(),
			ColumnData::Int2(container) => container.push_undefined(),
			ColumnData::Int4(container) => container.push_undefined(),
			ColumnData::Int8(container) => container.push_undefined(),
			ColumnData::Int16(container) => container.push_undefined(),
			ColumnData::Uint1(container) => container.push_undefined(),
			ColumnData::Uint2(container) => container.push_undefined(),
			ColumnData::Uint4(container) => container.push_undefined(),
			ColumnData::Uint8(container) => container.push_undefined(),
			ColumnData::Uint16(container) => container.push_undefined(),
			ColumnData::Utf8(container) => container.push_undefined(),
			ColumnData::Date(container) => container.push_undefined(),
			ColumnData::DateTime {
				container,
				..
			} => container.push_undefined(),
			ColumnData::Time(container) => container.push_undefined(),
			ColumnData::Duration {
				container,
				..
			} => container.push_undefined(),
			ColumnData::Decimal {
				container,
				..
			} => container.push_undefined(),
			ColumnData::Undefined(container) => container.push_undefined(),
		}
	}

	/// Append a `Value`, dispatching to the typed push of its family.
	pub fn push_value(&mut self, value: Value) {
		match value {
			Value::Undefined => self.push_undefined(),
			Value::Boolean(value) => self.push(value),
			Value::Float4(value) => self.push(value.value()),
			Value::Float8(value) => self.push(value.value()),
			Value::Int1(value) => self.push(value),
			Value::Int2(value) => self.push(value),
			Value::Int4(value) => self.push(value),
			Value::Int8(value) => self.push(value),
			Value::Int16(value) => self.push(value),
			Value::Uint1(value) => self.push(value),
			Value::Uint2(value) => self.push(value),
			Value::Uint4(value) => self.push(value),
			Value::Uint8(value) => self.push(value),
			Value::Uint16(value) => self.push(value),
			Value::Utf8(value) => self.push(value),
			Value::Date(value) => self.push(value),
			Value::DateTime(value) => self.push(value),
			Value::Time(value) => self.push(value),
			Value::Duration(value) => self.push(value),
			Value::Decimal(value) => self.push(value),
		}
	}

	// The first typed push into an all-undefined column commits its type.
	fn promote_undefined(&mut self, ty: &Type) {
		if let ColumnData::Undefined(container) = self {
			let len = container.len();
			let mut promoted = ColumnData::with_capacity(ty, len + 1);
			for _ in 0..len {
				promoted.push_undefined();
			}
			*self = promoted;
		}
	}
}

macro_rules! impl_push_number {
	($native:ty, $variant:ident, $ty:expr) => {
		impl Push<$native> for ColumnData {
			fn push(&mut self, value: $native) {
				match self {
					ColumnData::$variant(container) => container.push(value),
					ColumnData::Undefined(_) => {
						self.promote_undefined(&$ty);
						self.push(value);
					}
					other => panic!("called `push::<{}>()` on incompatible ColumnData::{}", stringify!($native), other.get_type()),
				}
			}
		}
	};
}

impl_push_number!(f32, Float4, Type::Float4);
impl_push_number!(f64, Float8, Type::Float8);
impl_push_number!(i8, Int1, Type::Int1);
impl_push_number!(i16, Int2, Type::Int2);
impl_push_number!(i32, Int4, Type::Int4);
impl_push_number!(i64, Int8, Type::Int8);
impl_push_number!(i128, Int16, Type::Int16);
impl_push_number!(u8, Uint1, Type::Uint1);
impl_push_number!(u16, Uint2, Type::Uint2);
impl_push_number!(u32, Uint4, Type::Uint4);
impl_push_number!(u64, Uint8, Type::Uint8);
impl_push_number!(u128, Uint16, Type::Uint16);

impl Push<bool> for ColumnData {
	fn push(&mut self, value: bool) {
		match self {
			ColumnData::Bool(container) => container.push(value),
			ColumnData::Undefined(_) => {
				self.promote_undefined(&Type::Boolean);
				self.push(value);
			}
			other => panic!("called `push::<bool>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

impl Push<String> for ColumnData {
	fn push(&mut self, value: String) {
		match self {
			ColumnData::Utf8(container) => container.push(value),
			ColumnData::Undefined(_) => {
				self.promote_undefined(&Type::Utf8);
				self.push(value);
			}
			other => panic!("called `push::<String>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

impl Push<Date> for ColumnData {
	fn push(&mut self, value: Date) {
		match self {
			ColumnData::Date(container) => container.push(value),
			ColumnData::Undefined(_) => {
				self.promote_undefined(&Type::Date);
				self.push(value);
			}
			other => panic!("called `push::<Date>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

impl Push<DateTime> for ColumnData {
	fn push(&mut self, value: DateTime) {
		match self {
			ColumnData::DateTime {
				container,
				..
			} => container.push(value),
			ColumnData::Undefined(_) => {
				self.promote_undefined(&Type::DateTime {
					unit: TimeUnit::Nanosecond,
					timezone: None,
				});
				self.push(value);
			}
			other => panic!("called `push::<DateTime>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

impl Push<Time> for ColumnData {
	fn push(&mut self, value: Time) {
		match self {
			ColumnData::Time(container) => container.push(value),
			ColumnData::Undefined(_) => {
				self.promote_undefined(&Type::Time);
				self.push(value);
			}
			other => panic!("called `push::<Time>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

impl Push<Duration> for ColumnData {
	fn push(&mut self, value: Duration) {
		match self {
			ColumnData::Duration {
				container,
				..
			} => container.push(value),
			ColumnData::Undefined(_) => {
				self.promote_undefined(&Type::Duration {
					unit: TimeUnit::Nanosecond,
				});
				self.push(value);
			}
			other => panic!("called `push::<Duration>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

impl Push<Decimal> for ColumnData {
	fn push(&mut self, value: Decimal) {
		match self {
			ColumnData::Decimal {
				container,
				scale,
			} => {
				// Values off the column scale are not representable.
				if value.to_unscaled(*scale).is_some() {
					container.push(value);
				} else {
					container.push_undefined();
				}
			}
			ColumnData::Undefined(_) => {
				let ty = Value::Decimal(value.clone()).get_type();
				self.promote_undefined(&ty);
				self.push(value);
			}
			other => panic!("called `push::<Decimal>()` on incompatible ColumnData::{}", other.get_type()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_typed_push() {
		let mut data = ColumnData::with_capacity(&Type::Int4, 2);
		data.push(1i32);
		data.push_undefined();

		assert_eq!(data.get_value(0), Value::Int4(1));
		assert_eq!(data.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_push_value_roundtrip() {
		let mut data = ColumnData::with_capacity(&Type::Date, 2);
		let date = Date::new(2020, 1, 1).unwrap();
		data.push_value(Value::Date(date));
		data.push_value(Value::Undefined);

		assert_eq!(data.get_value(0), Value::Date(date));
		assert!(!data.is_defined(1));
	}

	#[test]
	fn test_undefined_promotes_on_first_push() {
		let mut data = ColumnData::undefined(2);
		data.push(7i64);

		assert_eq!(data.get_type(), Type::Int8);
		assert_eq!(data.len(), 3);
		assert!(!data.is_defined(0));
		assert!(!data.is_defined(1));
		assert_eq!(data.get_value(2), Value::Int8(7));
	}

	#[test]
	fn test_decimal_off_scale_degrades_to_undefined() {
		let mut data = ColumnData::with_capacity(
			&Type::Decimal {
				scale: 2,
			},
			2,
		);
		data.push("1.25".parse::<Decimal>().unwrap());
		data.push("1.333".parse::<Decimal>().unwrap());

		assert!(data.is_defined(0));
		assert!(!data.is_defined(1));
	}

	#[test]
	#[should_panic(expected = "incompatible")]
	fn test_mismatched_push_panics() {
		let mut data = ColumnData::with_capacity(&Type::Int4, 1);
		data.push(true);
	}
}
