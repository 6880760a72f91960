// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use lacuna_core::{
	Decimal,
	container::{DecimalContainer, NumberContainer, TemporalContainer},
	value::is::{IsNumber, IsTemporal},
};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::interpolate::gap::scan;

// Float columns interpolate in their own precision: a Float4 column never
// widens to f64 on the way through.
macro_rules! impl_fill_float {
	($name:ident, $t:ty) => {
		pub(crate) fn $name(container: &NumberContainer<$t>) -> NumberContainer<$t> {
			let gaps = scan(container.bitvec());
			let mut out = NumberContainer::with_capacity(container.len());
			let mut next_gap = 0;

			for index in 0..container.len() {
				if let Some(&value) = container.get(index) {
					out.push(value);
					continue;
				}
				while next_gap < gaps.len() && gaps[next_gap].last < index {
					next_gap += 1;
				}
				match gaps.get(next_gap) {
					Some(gap) if gap.covers(index) => {
						let (Some(&left), Some(&right)) = (container.get(gap.left), container.get(gap.right)) else {
							out.push_undefined();
							continue;
						};
						let fraction = (index - gap.left) as $t / gap.width() as $t;
						out.push(left + (right - left) * fraction);
					}
					_ => out.push_undefined(),
				}
			}

			out
		}
	};
}

impl_fill_float!(fill_float4, f32);
impl_fill_float!(fill_float8, f64);

/// Linear fill for integer columns. Interpolated values are generally not
/// integral, so the output buffer is always `f64`.
pub(crate) fn fill_number_as_float8<T>(container: &NumberContainer<T>) -> NumberContainer<f64>
where
	T: IsNumber + ToPrimitive,
{
	let gaps = scan(container.bitvec());
	let mut out = NumberContainer::with_capacity(container.len());
	let mut next_gap = 0;

	for index in 0..container.len() {
		if let Some(value) = container.get(index).and_then(|value| value.to_f64()) {
			out.push(value);
			continue;
		}
		while next_gap < gaps.len() && gaps[next_gap].last < index {
			next_gap += 1;
		}
		match gaps.get(next_gap) {
			Some(gap) if gap.covers(index) => {
				let left = container.get(gap.left).and_then(|value| value.to_f64());
				let right = container.get(gap.right).and_then(|value| value.to_f64());
				let (Some(left), Some(right)) = (left, right) else {
					out.push_undefined();
					continue;
				};
				let fraction = (index - gap.left) as f64 / gap.width() as f64;
				out.push(left + (right - left) * fraction);
			}
			_ => out.push_undefined(),
		}
	}

	out
}

/// Linear fill in the integer tick domain. `to_tick` projects a value onto
/// the column's unit; `from_tick` rebuilds one and fails outside the value
/// type's range, which aborts the whole fill. The exact rational result
/// `left + (right - left) * fraction` is formed as a single quotient so the
/// i128 division truncates the result itself toward zero.
pub(crate) fn fill_ticks<T>(container: &TemporalContainer<T>, to_tick: impl Fn(&T) -> i64, from_tick: impl Fn(i64) -> Option<T>) -> Option<TemporalContainer<T>>
where
	T: IsTemporal,
{
	let gaps = scan(container.bitvec());
	let mut out = TemporalContainer::with_capacity(container.len());
	let mut next_gap = 0;

	for index in 0..container.len() {
		if let Some(value) = container.get(index) {
			out.push(*value);
			continue;
		}
		while next_gap < gaps.len() && gaps[next_gap].last < index {
			next_gap += 1;
		}
		match gaps.get(next_gap) {
			Some(gap) if gap.covers(index) => {
				let (Some(left), Some(right)) = (container.get(gap.left), container.get(gap.right)) else {
					out.push_undefined();
					continue;
				};
				let left = i128::from(to_tick(left));
				let right = i128::from(to_tick(right));
				let width = gap.width() as i128;
				let position = (index - gap.left) as i128;
				let tick = (left * width + (right - left) * position) / width;
				out.push(from_tick(tick as i64)?);
			}
			_ => out.push_undefined(),
		}
	}

	Some(out)
}

/// Linear fill in the unscaled-integer domain, with no floating-point
/// intermediates anywhere. The `BigInt` division truncates toward zero
/// (1/3 of the way from 1.00 to 2.00 at scale 2 is 1.33, never 1.34);
/// results that do not fit the 128-bit unscaled range abort the fill.
pub(crate) fn fill_decimal(container: &DecimalContainer, scale: u8) -> Option<DecimalContainer> {
	let gaps = scan(container.bitvec());
	let mut out = DecimalContainer::with_capacity(container.len());
	let mut next_gap = 0;

	for index in 0..container.len() {
		if container.is_defined(index) {
			out.push(container.get(index)?.clone());
			continue;
		}
		while next_gap < gaps.len() && gaps[next_gap].last < index {
			next_gap += 1;
		}
		match gaps.get(next_gap) {
			Some(gap) if gap.covers(index) => {
				let left = container.get(gap.left)?.to_unscaled(scale)?;
				let right = container.get(gap.right)?.to_unscaled(scale)?;
				let width = BigInt::from(gap.width());
				let position = BigInt::from(index - gap.left);
				let unscaled = (&left * &width + (&right - &left) * position) / width;
				out.push(Decimal::from_unscaled(unscaled, scale)?);
			}
			_ => out.push_undefined(),
		}
	}

	Some(out)
}

#[cfg(test)]
mod tests {
	use lacuna_core::Date;

	use super::*;

	fn float8(values: &[Option<f64>]) -> NumberContainer<f64> {
		let mut container = NumberContainer::with_capacity(values.len());
		for value in values {
			match value {
				Some(value) => container.push(*value),
				None => container.push_undefined(),
			}
		}
		container
	}

	#[test]
	fn test_fill_float8_midpoints() {
		let filled = fill_float8(&float8(&[Some(1.0), None, Some(2.0), None, Some(3.0)]));
		let collected: Vec<Option<f64>> = filled.iter().collect();
		assert_eq!(collected, vec![Some(1.0), Some(1.5), Some(2.0), Some(2.5), Some(3.0)]);
	}

	#[test]
	fn test_fill_float8_thirds() {
		let filled = fill_float8(&float8(&[Some(0.0), None, None, Some(3.0)]));
		let collected: Vec<Option<f64>> = filled.iter().collect();
		assert_eq!(collected, vec![Some(0.0), Some(1.0), Some(2.0), Some(3.0)]);
	}

	#[test]
	fn test_fill_float8_keeps_boundary_runs() {
		let filled = fill_float8(&float8(&[None, Some(1.0), None, Some(2.0), None]));
		let collected: Vec<Option<f64>> = filled.iter().collect();
		assert_eq!(collected, vec![None, Some(1.0), Some(1.5), Some(2.0), None]);
	}

	#[test]
	fn test_fill_float4_stays_exact() {
		let mut container: NumberContainer<f32> = NumberContainer::with_capacity(3);
		container.push(1.0);
		container.push_undefined();
		container.push(2.0);

		let filled = fill_float4(&container);
		let collected: Vec<Option<f32>> = filled.iter().collect();
		assert_eq!(collected, vec![Some(1.0), Some(1.5), Some(2.0)]);
	}

	#[test]
	fn test_fill_number_as_float8() {
		let mut container: NumberContainer<i32> = NumberContainer::with_capacity(5);
		for value in [Some(1), None, Some(2), None, Some(3)] {
			match value {
				Some(value) => container.push(value),
				None => container.push_undefined(),
			}
		}

		let filled = fill_number_as_float8(&container);
		let collected: Vec<Option<f64>> = filled.iter().collect();
		assert_eq!(collected, vec![Some(1.0), Some(1.5), Some(2.0), Some(2.5), Some(3.0)]);
	}

	#[test]
	fn test_fill_ticks_truncates_toward_zero() {
		let mut container: TemporalContainer<Date> = TemporalContainer::with_capacity(3);
		container.push(Date::from_days(0).unwrap());
		container.push_undefined();
		container.push(Date::from_days(1).unwrap());

		let filled = fill_ticks(&container, |date| i64::from(date.to_days()), |tick| i32::try_from(tick).ok().and_then(Date::from_days)).unwrap();
		let collected: Vec<Option<Date>> = filled.iter().collect();
		// Midpoint is half a day; whole-day ticks truncate to the earlier day.
		assert_eq!(collected, vec![Some(Date::from_days(0).unwrap()), Some(Date::from_days(0).unwrap()), Some(Date::from_days(1).unwrap())]);
	}

	#[test]
	fn test_fill_ticks_truncates_toward_zero_across_the_epoch() {
		let mut container: TemporalContainer<Date> = TemporalContainer::with_capacity(3);
		container.push(Date::from_days(-1).unwrap());
		container.push_undefined();
		container.push(Date::from_days(0).unwrap());

		let filled = fill_ticks(&container, |date| i64::from(date.to_days()), |tick| i32::try_from(tick).ok().and_then(Date::from_days)).unwrap();
		// The exact midpoint is -0.5 days; toward zero lands on the epoch.
		assert_eq!(filled.get(1), Some(&Date::from_days(0).unwrap()));
	}

	#[test]
	fn test_fill_ticks_aborts_when_reconstruction_fails() {
		let mut container: TemporalContainer<Date> = TemporalContainer::with_capacity(3);
		container.push(Date::from_days(0).unwrap());
		container.push_undefined();
		container.push(Date::from_days(2).unwrap());

		assert!(fill_ticks(&container, |date| i64::from(date.to_days()), |_| None::<Date>).is_none());
	}

	fn decimal(values: &[Option<&str>]) -> DecimalContainer {
		let mut container = DecimalContainer::with_capacity(values.len());
		for value in values {
			match value {
				Some(value) => container.push(value.parse().unwrap()),
				None => container.push_undefined(),
			}
		}
		container
	}

	#[test]
	fn test_fill_decimal_truncates_not_rounds() {
		let filled = fill_decimal(&decimal(&[Some("1.00"), None, None, Some("2.00")]), 2).unwrap();
		let collected: Vec<Option<String>> = filled.iter().map(|value| value.map(|decimal| decimal.to_string())).collect();
		assert_eq!(collected, vec![Some("1.00".to_string()), Some("1.33".to_string()), Some("1.66".to_string()), Some("2.00".to_string())]);
	}

	#[test]
	fn test_fill_decimal_negative_truncates_toward_zero() {
		let filled = fill_decimal(&decimal(&[Some("-1.00"), None, None, Some("-2.00")]), 2).unwrap();
		let collected: Vec<Option<String>> = filled.iter().map(|value| value.map(|decimal| decimal.to_string())).collect();
		assert_eq!(collected, vec![Some("-1.00".to_string()), Some("-1.33".to_string()), Some("-1.66".to_string()), Some("-2.00".to_string())]);
	}

	#[test]
	fn test_fill_decimal_overflow_aborts() {
		// Anchors near the 128-bit ceiling force the midpoint past it.
		let huge = Decimal::from_unscaled(BigInt::from(i128::MAX), 0).unwrap();
		let mut container = DecimalContainer::with_capacity(3);
		container.push(huge.clone());
		container.push_undefined();
		container.push("1e40".parse().unwrap());

		assert!(fill_decimal(&container, 0).is_none());
	}
}
