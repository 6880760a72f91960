// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use crate::value::{
	Date, DateTime, Decimal, Duration, Time,
	column::ColumnData,
	container::{BoolContainer, DecimalContainer, NumberContainer, StringContainer, TemporalContainer, UndefinedContainer},
	r#type::TimeUnit,
};

/// Constructors for fully-defined columns. Columns with undefined rows are
/// built through `with_capacity` + `push`/`push_undefined`.
impl ColumnData {
	pub fn bool(values: Vec<bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(values))
	}

	pub fn float4(values: Vec<f32>) -> Self {
		ColumnData::Float4(NumberContainer::from_vec(values))
	}

	pub fn float8(values: Vec<f64>) -> Self {
		ColumnData::Float8(NumberContainer::from_vec(values))
	}

	pub fn int1(values: Vec<i8>) -> Self {
		ColumnData::Int1(NumberContainer::from_vec(values))
	}

	pub fn int2(values: Vec<i16>) -> Self {
		ColumnData::Int2(NumberContainer::from_vec(values))
	}

	pub fn int4(values: Vec<i32>) -> Self {
		ColumnData::Int4(NumberContainer::from_vec(values))
	}

	pub fn int8(values: Vec<i64>) -> Self {
		ColumnData::Int8(NumberContainer::from_vec(values))
	}

	pub fn int16(values: Vec<i128>) -> Self {
		ColumnData::Int16(NumberContainer::from_vec(values))
	}

	pub fn uint1(values: Vec<u8>) -> Self {
		ColumnData::Uint1(NumberContainer::from_vec(values))
	}

	pub fn uint2(values: Vec<u16>) -> Self {
		ColumnData::Uint2(NumberContainer::from_vec(values))
	}

	pub fn uint4(values: Vec<u32>) -> Self {
		ColumnData::Uint4(NumberContainer::from_vec(values))
	}

	pub fn uint8(values: Vec<u64>) -> Self {
		ColumnData::Uint8(NumberContainer::from_vec(values))
	}

	pub fn uint16(values: Vec<u128>) -> Self {
		ColumnData::Uint16(NumberContainer::from_vec(values))
	}

	pub fn utf8(values: Vec<String>) -> Self {
		ColumnData::Utf8(StringContainer::from_vec(values))
	}

	pub fn date(values: Vec<Date>) -> Self {
		ColumnData::Date(TemporalContainer::from_vec(values))
	}

	pub fn datetime(unit: TimeUnit, timezone: Option<String>, values: Vec<DateTime>) -> Self {
		ColumnData::DateTime {
			container: TemporalContainer::from_vec(values),
			unit,
			timezone,
		}
	}

	pub fn time(values: Vec<Time>) -> Self {
		ColumnData::Time(TemporalContainer::from_vec(values))
	}

	pub fn duration(unit: TimeUnit, values: Vec<Duration>) -> Self {
		ColumnData::Duration {
			container: TemporalContainer::from_vec(values),
			unit,
		}
	}

	pub fn decimal(scale: u8, values: Vec<Decimal>) -> Self {
		ColumnData::Decimal {
			container: DecimalContainer::from_vec(values),
			scale,
		}
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}
}
