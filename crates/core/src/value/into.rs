// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use crate::value::{Date, DateTime, Decimal, Duration, Time, Value};

/// Lift a native value into `Value`. Containers use this to build values
/// without any type-id dispatch; the NaN-rejecting float constructors apply.
pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Boolean(self)
	}
}

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::float4(self)
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::float8(self)
	}
}

impl IntoValue for i8 {
	fn into_value(self) -> Value {
		Value::Int1(self)
	}
}

impl IntoValue for i16 {
	fn into_value(self) -> Value {
		Value::Int2(self)
	}
}

impl IntoValue for i32 {
	fn into_value(self) -> Value {
		Value::Int4(self)
	}
}

impl IntoValue for i64 {
	fn into_value(self) -> Value {
		Value::Int8(self)
	}
}

impl IntoValue for i128 {
	fn into_value(self) -> Value {
		Value::Int16(self)
	}
}

impl IntoValue for u8 {
	fn into_value(self) -> Value {
		Value::Uint1(self)
	}
}

impl IntoValue for u16 {
	fn into_value(self) -> Value {
		Value::Uint2(self)
	}
}

impl IntoValue for u32 {
	fn into_value(self) -> Value {
		Value::Uint4(self)
	}
}

impl IntoValue for u64 {
	fn into_value(self) -> Value {
		Value::Uint8(self)
	}
}

impl IntoValue for u128 {
	fn into_value(self) -> Value {
		Value::Uint16(self)
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Utf8(self)
	}
}

impl IntoValue for Date {
	fn into_value(self) -> Value {
		Value::Date(self)
	}
}

impl IntoValue for DateTime {
	fn into_value(self) -> Value {
		Value::DateTime(self)
	}
}

impl IntoValue for Time {
	fn into_value(self) -> Value {
		Value::Time(self)
	}
}

impl IntoValue for Duration {
	fn into_value(self) -> Value {
		Value::Duration(self)
	}
}

impl IntoValue for Decimal {
	fn into_value(self) -> Value {
		Value::Decimal(self)
	}
}
