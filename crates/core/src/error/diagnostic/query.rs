// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use crate::error::diagnostic::Diagnostic;

/// An expression references a column that does not exist in the input
pub fn column_not_found(name: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_001".to_string(),
		message: format!("Column '{}' not found", name),
		column: None,
		label: None,
		help: Some("Check the column name against the input schema".to_string()),
		notes: vec![],
	}
}
