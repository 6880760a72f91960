// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use crate::{
	error::diagnostic::{Diagnostic, DiagnosticColumn},
	value::r#type::Type,
};

/// The column's logical type has no physical ordinal to interpolate on.
/// Schema-only callers have no column name to report.
pub fn unsupported_type(column: Option<&str>, ty: &Type) -> Diagnostic {
	Diagnostic {
		code: "INTERPOLATE_001".to_string(),
		message: match column {
			Some(column) => format!("Cannot interpolate column '{}' of type {}", column, ty),
			None => format!("Cannot interpolate a column of type {}", ty),
		},
		column: column.map(|column| DiagnosticColumn {
			name: column.to_string(),
			ty: ty.clone(),
		}),
		label: Some("no physical ordinal for this type".to_string()),
		help: Some("Interpolation is defined for numeric, decimal and temporal columns only".to_string()),
		notes: vec![
			"Supported families: integers, floats, Decimal, Date, DateTime, Time, Duration".to_string(),
			"Expression-level callers skip unsupported columns and pass them through unchanged".to_string(),
		],
	}
}

/// Method string is neither "linear" nor "nearest"
pub fn invalid_method(raw: &str) -> Diagnostic {
	Diagnostic {
		code: "INTERPOLATE_002".to_string(),
		message: format!("Invalid interpolation method '{}'", raw),
		column: None,
		label: None,
		help: Some("Use \"linear\" or \"nearest\"".to_string()),
		notes: vec![],
	}
}
