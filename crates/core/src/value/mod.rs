// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod column;
pub mod container;
mod date;
mod datetime;
mod decimal;
mod duration;
pub mod into;
pub mod is;
mod ordered_f32;
mod ordered_f64;
mod time;
pub mod r#type;

pub use date::Date;
pub use datetime::DateTime;
pub use decimal::Decimal;
pub use duration::Duration;
pub use into::IntoValue;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use time::Time;
pub use r#type::{TimeUnit, Type};

/// A single logical value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A calendar date
	Date(Date),
	/// An absolute instant with nanosecond precision in UTC
	DateTime(DateTime),
	/// A time of day
	Time(Time),
	/// A signed span of time
	Duration(Duration),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	/// NaN has no defined ordering or equality and maps to `Undefined`.
	pub fn float4(value: impl Into<f32>) -> Self {
		OrderedF32::try_from(value.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	/// NaN has no defined ordering or equality and maps to `Undefined`.
	pub fn float8(value: impl Into<f64>) -> Self {
		OrderedF64::try_from(value.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// The logical type of this value alone. Column-level parameters a
	/// bare value cannot know (tick unit, time zone, declared scale)
	/// come out at their value-level defaults: nanosecond ticks, no
	/// zone, the value's own scale.
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Utf8(_) => Type::Utf8,
			Value::Date(_) => Type::Date,
			Value::DateTime(_) => Type::DateTime {
				unit: TimeUnit::Nanosecond,
				timezone: None,
			},
			Value::Time(_) => Type::Time,
			Value::Duration(_) => Type::Duration {
				unit: TimeUnit::Nanosecond,
			},
			Value::Decimal(decimal) => Type::Decimal {
				scale: decimal.scale().clamp(0, i64::from(u8::MAX)) as u8,
			},
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Date(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
			Value::Time(value) => Display::fmt(value, f),
			Value::Duration(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
		}
	}
}
