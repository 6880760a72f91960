// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

mod schema;

use lacuna_core::{Column, Result, diagnostic::query::column_not_found, error};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use schema::{Schema, SchemaColumn};

use crate::interpolate::{InterpolationMethod, interpolate};

/// A deferred computation over named columns. Closed like everything else:
/// the evaluator and the schema resolver both match it exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
	Column(ColumnExpression),
	Interpolate(InterpolateExpression),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnExpression {
	pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpolateExpression {
	pub input: Box<Expression>,
	pub method: InterpolationMethod,
}

impl Expression {
	pub fn column(name: impl Into<String>) -> Self {
		Expression::Column(ColumnExpression {
			name: name.into(),
		})
	}

	pub fn interpolate(input: Expression, method: InterpolationMethod) -> Self {
		Expression::Interpolate(InterpolateExpression {
			input: Box::new(input),
			method,
		})
	}
}

pub(crate) struct Evaluator;

impl Evaluator {
	pub(crate) fn evaluate(&self, expr: &Expression, columns: &[Column]) -> Result<Column> {
		match expr {
			Expression::Column(expr) => self.column(expr, columns),
			Expression::Interpolate(expr) => self.interpolate(expr, columns),
		}
	}

	fn column(&self, expr: &ColumnExpression, columns: &[Column]) -> Result<Column> {
		columns.iter().find(|column| column.name == expr.name).cloned().ok_or_else(|| error!(column_not_found(&expr.name)))
	}

	fn interpolate(&self, expr: &InterpolateExpression, columns: &[Column]) -> Result<Column> {
		let input = self.evaluate(&expr.input, columns)?;
		match interpolate(&input, expr.method) {
			Ok(column) => Ok(column),
			// Unsupported columns pass through unchanged at this level;
			// the operator itself stays strict.
			Err(err) if err.code() == "INTERPOLATE_001" => {
				debug!(column = %input.name, ty = %input.get_type(), "skipping interpolation of unsupported column");
				Ok(input)
			}
			Err(err) => Err(err),
		}
	}
}

/// Evaluate an expression eagerly against materialized columns.
pub fn evaluate(expr: &Expression, columns: &[Column]) -> Result<Column> {
	Evaluator.evaluate(expr, columns)
}

#[cfg(test)]
mod tests {
	use lacuna_core::ColumnData;

	use super::*;

	#[test]
	fn test_column_lookup() {
		let columns = vec![Column::new("a", ColumnData::int4(vec![1, 2]))];
		let result = evaluate(&Expression::column("a"), &columns).unwrap();
		assert_eq!(result, columns[0]);
	}

	#[test]
	fn test_column_not_found() {
		let err = evaluate(&Expression::column("missing"), &[]).unwrap_err();
		assert_eq!(err.code(), "QUERY_001");
	}

	#[test]
	fn test_unsupported_column_passes_through() {
		let columns = vec![Column::new("tags", ColumnData::utf8(vec!["x".to_string(), "y".to_string()]))];
		let expr = Expression::interpolate(Expression::column("tags"), InterpolationMethod::Linear);
		let result = evaluate(&expr, &columns).unwrap();
		assert_eq!(result, columns[0]);
	}
}
