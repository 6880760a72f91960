// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A 4-byte float that is guaranteed not to be NaN, so comparisons are
/// total. Negative zero is normalized to zero so equality stays consistent.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}
}

impl Eq for OrderedF32 {}

impl TryFrom<f32> for OrderedF32 {
	type Error = ();

	fn try_from(value: f32) -> Result<Self, Self::Error> {
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

impl From<OrderedF32> for f32 {
	fn from(value: OrderedF32) -> f32 {
		value.0
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for OrderedF32 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f32(self.0)
	}
}

impl<'de> Deserialize<'de> for OrderedF32 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f32::deserialize(deserializer)?;
		OrderedF32::try_from(value).map_err(|_| de::Error::custom("NaN is not a valid OrderedF32"))
	}
}
