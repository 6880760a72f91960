// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use lacuna_core::{Result, Type, diagnostic::interpolate::unsupported_type, return_error};

use crate::interpolate::InterpolationMethod;

/// The output type of interpolation, from the input type alone. The lazy
/// schema path calls this with no data in sight; the eager operator produces
/// a column of exactly this type. The two must never diverge.
///
/// Linear fills are generally non-integral, so integer columns widen to
/// `Float8` while `Float4` keeps its width. Nearest selection only ever
/// copies input values and preserves every type. Temporal and decimal
/// columns keep their unit, time zone and scale under both methods.
pub fn resolve_output_type(ty: &Type, method: InterpolationMethod) -> Result<Type> {
	match ty {
		Type::Boolean | Type::Utf8 => {
			return_error!(unsupported_type(None, ty))
		}
		Type::Float4
		| Type::Float8
		| Type::Int1
		| Type::Int2
		| Type::Int4
		| Type::Int8
		| Type::Int16
		| Type::Uint1
		| Type::Uint2
		| Type::Uint4
		| Type::Uint8
		| Type::Uint16 => Ok(match method {
			InterpolationMethod::Linear => {
				if *ty == Type::Float4 {
					Type::Float4
				} else {
					Type::Float8
				}
			}
			InterpolationMethod::Nearest => ty.clone(),
		}),
		Type::Date
		| Type::DateTime {
			..
		}
		| Type::Time
		| Type::Duration {
			..
		}
		| Type::Decimal {
			..
		}
		| Type::Undefined => Ok(ty.clone()),
	}
}

#[cfg(test)]
mod tests {
	use lacuna_core::TimeUnit;

	use super::*;

	#[test]
	fn test_linear_widens_integers_to_float8() {
		for ty in [Type::Int1, Type::Int2, Type::Int4, Type::Int8, Type::Int16, Type::Uint1, Type::Uint2, Type::Uint4, Type::Uint8, Type::Uint16, Type::Float8] {
			assert_eq!(resolve_output_type(&ty, InterpolationMethod::Linear).unwrap(), Type::Float8);
		}
	}

	#[test]
	fn test_linear_keeps_float4() {
		assert_eq!(resolve_output_type(&Type::Float4, InterpolationMethod::Linear).unwrap(), Type::Float4);
	}

	#[test]
	fn test_nearest_preserves_numeric_types() {
		for ty in [Type::Int1, Type::Uint16, Type::Float4, Type::Float8] {
			assert_eq!(resolve_output_type(&ty, InterpolationMethod::Nearest).unwrap(), ty);
		}
	}

	#[test]
	fn test_temporal_and_decimal_types_are_identical() {
		let types = [
			Type::Date,
			Type::DateTime {
				unit: TimeUnit::Microsecond,
				timezone: Some("Asia/Kathmandu".to_string()),
			},
			Type::Time,
			Type::Duration {
				unit: TimeUnit::Millisecond,
			},
			Type::Decimal {
				scale: 2,
			},
		];
		for ty in types {
			for method in [InterpolationMethod::Linear, InterpolationMethod::Nearest] {
				assert_eq!(resolve_output_type(&ty, method).unwrap(), ty);
			}
		}
	}

	#[test]
	fn test_unsupported_families_fail() {
		for ty in [Type::Boolean, Type::Utf8] {
			for method in [InterpolationMethod::Linear, InterpolationMethod::Nearest] {
				let err = resolve_output_type(&ty, method).unwrap_err();
				assert_eq!(err.code(), "INTERPOLATE_001");
			}
		}
	}

	#[test]
	fn test_undefined_passes_through() {
		assert_eq!(resolve_output_type(&Type::Undefined, InterpolationMethod::Linear).unwrap(), Type::Undefined);
	}
}
