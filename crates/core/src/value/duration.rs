// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// A signed span of time, stored as a nanosecond count. The tick unit a
/// column declares lives on the column's `Type`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
	nanos: i64,
}

impl Duration {
	pub fn from_nanos(nanos: i64) -> Self {
		Self {
			nanos,
		}
	}

	pub fn from_micros(micros: i64) -> Option<Self> {
		Some(Self {
			nanos: micros.checked_mul(1_000)?,
		})
	}

	pub fn from_millis(millis: i64) -> Option<Self> {
		Some(Self {
			nanos: millis.checked_mul(1_000_000)?,
		})
	}

	pub fn from_seconds(seconds: i64) -> Option<Self> {
		Some(Self {
			nanos: seconds.checked_mul(NANOS_PER_SECOND)?,
		})
	}

	pub fn from_hours(hours: i64) -> Option<Self> {
		Some(Self {
			nanos: hours.checked_mul(3_600 * NANOS_PER_SECOND)?,
		})
	}

	pub fn from_days(days: i64) -> Option<Self> {
		Some(Self {
			nanos: days.checked_mul(NANOS_PER_DAY)?,
		})
	}

	pub fn to_nanos(&self) -> i64 {
		self.nanos
	}

	pub fn is_negative(&self) -> bool {
		self.nanos < 0
	}
}

impl Display for Duration {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let total = self.nanos.unsigned_abs();
		if self.nanos < 0 {
			f.write_str("-")?;
		}
		let days = total / NANOS_PER_DAY as u64;
		let mut rest = total % NANOS_PER_DAY as u64;
		if days > 0 {
			write!(f, "{}d ", days)?;
		}
		let hours = rest / (3_600 * NANOS_PER_SECOND as u64);
		rest %= 3_600 * NANOS_PER_SECOND as u64;
		let minutes = rest / (60 * NANOS_PER_SECOND as u64);
		rest %= 60 * NANOS_PER_SECOND as u64;
		let seconds = rest / NANOS_PER_SECOND as u64;
		let nanos = rest % NANOS_PER_SECOND as u64;
		write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)?;
		if nanos != 0 {
			write!(f, ".{:09}", nanos)?;
		}
		Ok(())
	}
}
