// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::r#type::Type,
};

/// A decimal result's unscaled integer does not fit the 128-bit
/// representable range of the column
pub fn decimal_out_of_range(column: &str, scale: u8) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_003".to_string(),
		message: format!("Decimal value in column '{}' exceeds the representable range at scale {}", column, scale),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty: Type::Decimal {
				scale,
			},
		}),
		label: Some("unscaled integer outside the 128-bit range".to_string()),
		help: Some("Reduce the scale or the magnitude of the column's values".to_string()),
		notes: vec!["Decimal columns store an unscaled 128-bit integer per value".to_string()],
	}
}

/// A temporal tick result cannot be represented by the column's value type
pub fn temporal_out_of_range(column: &str, ty: &Type) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_004".to_string(),
		message: format!("Temporal value in column '{}' is outside the range of {}", column, ty),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			ty: ty.clone(),
		}),
		label: Some("tick count outside the representable range".to_string()),
		help: None,
		notes: vec![],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decimal_out_of_range_keeps_scale() {
		let diagnostic = decimal_out_of_range("price", 2);
		assert_eq!(diagnostic.code, "NUMBER_003");
		assert_eq!(
			diagnostic.column.unwrap().ty,
			Type::Decimal {
				scale: 2
			}
		);
	}
}
