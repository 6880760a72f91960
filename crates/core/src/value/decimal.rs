// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// An arbitrary-precision decimal value. Columns constrain it further: a
/// decimal column with scale S holds only values exactly representable at
/// scale S whose unscaled integer fits 128 bits.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Self(inner)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn scale(&self) -> i64 {
		self.0.as_bigint_and_exponent().1
	}

	/// Build from an unscaled integer at the given scale, e.g. (133, 2)
	/// is 1.33. Fails when the unscaled integer exceeds 128 bits.
	pub fn from_unscaled(unscaled: BigInt, scale: u8) -> Option<Self> {
		unscaled.to_i128()?;
		Some(Self(BigDecimal::new(unscaled, i64::from(scale))))
	}

	/// The unscaled integer of this value at the given scale, e.g. 1.33
	/// at scale 2 is 133. Fails when the value is not exactly
	/// representable at that scale.
	pub fn to_unscaled(&self, scale: u8) -> Option<BigInt> {
		let (mantissa, exponent) = self.0.as_bigint_and_exponent();
		let scale = i64::from(scale);
		if exponent <= scale {
			Some(mantissa * pow10((scale - exponent) as u32))
		} else {
			let factor = pow10((exponent - scale) as u32);
			if (&mantissa % &factor).is_zero() {
				Some(mantissa / factor)
			} else {
				None
			}
		}
	}

	pub fn is_negative(&self) -> bool {
		self.0.is_negative()
	}
}

fn pow10(exponent: u32) -> BigInt {
	num_traits::pow(BigInt::from(10), exponent as usize)
}

impl FromStr for Decimal {
	type Err = bigdecimal::ParseBigDecimalError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Ok(Self(BigDecimal::from_str(value)?))
	}
}

impl Default for Decimal {
	fn default() -> Self {
		Self(BigDecimal::zero())
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_unscaled() {
		let decimal = Decimal::from_unscaled(BigInt::from(133), 2).unwrap();
		assert_eq!(decimal.to_string(), "1.33");

		let decimal = Decimal::from_unscaled(BigInt::from(-5), 0).unwrap();
		assert_eq!(decimal.to_string(), "-5");
	}

	#[test]
	fn test_from_unscaled_rejects_beyond_128_bits() {
		let huge = pow10(40);
		assert!(Decimal::from_unscaled(huge, 2).is_none());
		assert!(Decimal::from_unscaled(BigInt::from(i128::MAX), 2).is_some());
	}

	#[test]
	fn test_to_unscaled_widens_exactly() {
		let decimal: Decimal = "1.5".parse().unwrap();
		assert_eq!(decimal.to_unscaled(2), Some(BigInt::from(150)));
		assert_eq!(decimal.to_unscaled(1), Some(BigInt::from(15)));
	}

	#[test]
	fn test_to_unscaled_rejects_inexact() {
		let decimal: Decimal = "1.234".parse().unwrap();
		assert_eq!(decimal.to_unscaled(3), Some(BigInt::from(1234)));
		assert_eq!(decimal.to_unscaled(2), None);
	}

	#[test]
	fn test_roundtrip() {
		let decimal = Decimal::from_unscaled(BigInt::from(166), 2).unwrap();
		assert_eq!(decimal.to_unscaled(2), Some(BigInt::from(166)));
	}

	#[test]
	fn test_value_equality_ignores_trailing_zeros() {
		let a: Decimal = "1.5".parse().unwrap();
		let b = Decimal::from_unscaled(BigInt::from(150), 2).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn test_negative_to_unscaled() {
		let decimal: Decimal = "-1.33".parse().unwrap();
		assert_eq!(decimal.to_unscaled(2), Some(BigInt::from(-133)));
		assert!(decimal.is_negative());
	}
}
