// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

mod gap;
mod linear;
mod method;
mod nearest;
mod resolve;

use lacuna_core::{
	Column, ColumnData, Date, DateTime, Duration, Result, Time,
	diagnostic::{
		interpolate::unsupported_type,
		number::{decimal_out_of_range, temporal_out_of_range},
	},
	error, return_error,
};
use tracing::debug;

pub use method::InterpolationMethod;
pub use resolve::resolve_output_type;

use crate::interpolate::{
	linear::{fill_decimal, fill_float4, fill_float8, fill_number_as_float8, fill_ticks},
	nearest::fill_nearest,
};

/// Fill every interior run of undefined rows from the nearest defined value
/// on each side. Leading and trailing runs have only one anchor and stay
/// undefined. The input column is never touched; the output column has the
/// type `resolve_output_type` predicts for it.
///
/// Columns without a physical ordinal (boolean, text) fail with an
/// unsupported-type diagnostic; expression-level callers own the decision to
/// skip such columns.
pub fn interpolate(column: &Column, method: InterpolationMethod) -> Result<Column> {
	debug!(column = %column.name, %method, rows = column.len(), "interpolate column");
	let data = match method {
		InterpolationMethod::Linear => linear(column)?,
		InterpolationMethod::Nearest => nearest(column)?,
	};
	Ok(Column::new(column.name.clone(), data))
}

fn linear(column: &Column) -> Result<ColumnData> {
	match &column.data {
		ColumnData::Bool(_) | ColumnData::Utf8(_) => {
			return_error!(unsupported_type(Some(&column.name), &column.get_type()))
		}
		// An all-undefined column has no anchors and nothing to fill.
		ColumnData::Undefined(_) => Ok(column.data.clone()),
		ColumnData::Float4(container) => Ok(ColumnData::Float4(fill_float4(container))),
		ColumnData::Float8(container) => Ok(ColumnData::Float8(fill_float8(container))),
		ColumnData::Int1(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Int2(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Int4(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Int8(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Int16(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Uint1(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Uint2(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Uint4(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Uint8(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Uint16(container) => Ok(ColumnData::Float8(fill_number_as_float8(container))),
		ColumnData::Date(container) => {
			let filled = fill_ticks(container, |date| i64::from(date.to_days()), |tick| i32::try_from(tick).ok().and_then(Date::from_days))
				.ok_or_else(|| error!(temporal_out_of_range(&column.name, &column.get_type())))?;
			Ok(ColumnData::Date(filled))
		}
		ColumnData::DateTime {
			container,
			unit,
			timezone,
		} => {
			let factor = unit.nanos_per_tick();
			let filled = fill_ticks(container, |datetime| datetime.to_nanos() / factor, |tick| tick.checked_mul(factor).map(DateTime::from_timestamp_nanos))
				.ok_or_else(|| error!(temporal_out_of_range(&column.name, &column.get_type())))?;
			Ok(ColumnData::DateTime {
				container: filled,
				unit: *unit,
				timezone: timezone.clone(),
			})
		}
		ColumnData::Time(container) => {
			let filled = fill_ticks(container, |time| time.to_nanos() as i64, |tick| u64::try_from(tick).ok().and_then(Time::from_nanos))
				.ok_or_else(|| error!(temporal_out_of_range(&column.name, &column.get_type())))?;
			Ok(ColumnData::Time(filled))
		}
		ColumnData::Duration {
			container,
			unit,
		} => {
			let factor = unit.nanos_per_tick();
			let filled = fill_ticks(container, |duration| duration.to_nanos() / factor, |tick| tick.checked_mul(factor).map(Duration::from_nanos))
				.ok_or_else(|| error!(temporal_out_of_range(&column.name, &column.get_type())))?;
			Ok(ColumnData::Duration {
				container: filled,
				unit: *unit,
			})
		}
		ColumnData::Decimal {
			container,
			scale,
		} => {
			let filled = fill_decimal(container, *scale).ok_or_else(|| error!(decimal_out_of_range(&column.name, *scale)))?;
			Ok(ColumnData::Decimal {
				container: filled,
				scale: *scale,
			})
		}
	}
}

fn nearest(column: &Column) -> Result<ColumnData> {
	match &column.data {
		ColumnData::Bool(_) | ColumnData::Utf8(_) => {
			return_error!(unsupported_type(Some(&column.name), &column.get_type()))
		}
		ColumnData::Undefined(_) => Ok(column.data.clone()),
		data => Ok(fill_nearest(data)),
	}
}
