// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// An 8-byte float that is guaranteed not to be NaN, so comparisons are
/// total. Negative zero is normalized to zero so equality stays consistent.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}
}

impl Eq for OrderedF64 {}

impl TryFrom<f64> for OrderedF64 {
	type Error = ();

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			return Err(());
		}
		Ok(Self(if value == 0.0 {
			0.0
		} else {
			value
		}))
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> f64 {
		value.0
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for OrderedF64 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f64(self.0)
	}
}

impl<'de> Deserialize<'de> for OrderedF64 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f64::deserialize(deserializer)?;
		OrderedF64::try_from(value).map_err(|_| de::Error::custom("NaN is not a valid OrderedF64"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_nan() {
		assert!(OrderedF64::try_from(f64::NAN).is_err());
		assert!(OrderedF64::try_from(-3.25).is_ok());
	}

	#[test]
	fn test_negative_zero_normalized() {
		let zero = OrderedF64::try_from(0.0).unwrap();
		let negative_zero = OrderedF64::try_from(-0.0).unwrap();
		assert_eq!(zero, negative_zero);
	}
}
