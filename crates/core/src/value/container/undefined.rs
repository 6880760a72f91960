// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A column that holds only undefined values and has not yet committed to a
/// type. Only a length is tracked; the first typed push at the `ColumnData`
/// level promotes the whole column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.len
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn as_string(&self, _index: usize) -> String {
		"Undefined".to_string()
	}

	pub fn get_value(&self, _index: usize) -> Value {
		Value::Undefined
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_undefined_grows() {
		let mut container = UndefinedContainer::new(0);
		container.push_undefined();
		container.push_undefined();
		assert_eq!(container.len(), 2);
	}

	#[test]
	fn test_values_are_undefined() {
		let container = UndefinedContainer::new(3);
		assert_eq!(container.get_value(0), Value::Undefined);
		assert_eq!(container.as_string(2), "Undefined");
	}
}
