// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use lacuna_core::{Column, Result, Type, diagnostic::query::column_not_found, error};
use serde::{Deserialize, Serialize};

use crate::{evaluate::Expression, interpolate::resolve_output_type};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemaColumn {
	pub name: String,
	pub ty: Type,
}

/// The lazy side of evaluation: resolve an expression's output type from
/// column types alone, without any data. For every expression,
/// `schema.resolve(expr) == evaluate(expr, columns).get_type()` whenever
/// both succeed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	columns: Vec<SchemaColumn>,
}

impl Schema {
	pub fn new(columns: Vec<SchemaColumn>) -> Self {
		Self {
			columns,
		}
	}

	/// The schema of a set of materialized columns.
	pub fn of_columns(columns: &[Column]) -> Self {
		Self {
			columns: columns
				.iter()
				.map(|column| SchemaColumn {
					name: column.name.clone(),
					ty: column.get_type(),
				})
				.collect(),
		}
	}

	pub fn column(&self, name: &str) -> Option<&SchemaColumn> {
		self.columns.iter().find(|column| column.name == name)
	}

	pub fn resolve(&self, expr: &Expression) -> Result<Type> {
		match expr {
			Expression::Column(expr) => self.column(&expr.name).map(|column| column.ty.clone()).ok_or_else(|| error!(column_not_found(&expr.name))),
			Expression::Interpolate(expr) => {
				let input = self.resolve(&expr.input)?;
				match resolve_output_type(&input, expr.method) {
					Ok(ty) => Ok(ty),
					// Same skip policy as the evaluator: an unsupported
					// column flows through with its own type.
					Err(err) if err.code() == "INTERPOLATE_001" => Ok(input),
					Err(err) => Err(err),
				}
			}
		}
	}
}
