// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use lacuna_core::{Error, diagnostic::interpolate::invalid_method, error};
use serde::{Deserialize, Serialize};

/// How a gap position is filled from its two anchors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
	/// Fill proportionally to the position between the anchors
	Linear,
	/// Fill with the closer anchor's value; ties take the right anchor
	Nearest,
}

impl FromStr for InterpolationMethod {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"linear" => Ok(InterpolationMethod::Linear),
			"nearest" => Ok(InterpolationMethod::Nearest),
			other => Err(error!(invalid_method(other))),
		}
	}
}

impl Display for InterpolationMethod {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			InterpolationMethod::Linear => f.write_str("linear"),
			InterpolationMethod::Nearest => f.write_str("nearest"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_methods() {
		assert_eq!("linear".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Linear);
		assert_eq!("nearest".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Nearest);
	}

	#[test]
	fn test_parse_unknown_method_fails() {
		let err = "cubic".parse::<InterpolationMethod>().unwrap_err();
		assert_eq!(err.code(), "INTERPOLATE_002");
	}

	#[test]
	fn test_parse_is_case_sensitive() {
		assert!("Linear".parse::<InterpolationMethod>().is_err());
	}

	#[test]
	fn test_display() {
		assert_eq!(InterpolationMethod::Linear.to_string(), "linear");
		assert_eq!(InterpolationMethod::Nearest.to_string(), "nearest");
	}
}
