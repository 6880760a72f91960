// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

mod data;
mod factory;
mod push;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub use data::ColumnData;
pub use push::Push;

/// A named column: the unit every operator consumes and produces. Operators
/// never mutate a column in place; they allocate a fresh `ColumnData`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}
}

impl Deref for Column {
	type Target = ColumnData;

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::r#type::Type;

	#[test]
	fn test_deref_to_data() {
		let column = Column::new("a", ColumnData::int4(vec![1, 2, 3]));
		assert_eq!(column.len(), 3);
		assert_eq!(column.get_type(), Type::Int4);
	}
}
