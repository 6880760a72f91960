// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::Value,
};

/// A UTF-8 text column buffer. Text has no physical ordinal, so operators
/// that need one (interpolation among them) reject this container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StringContainer {
	data: CowVec<String>,
	bitvec: BitVec,
}

impl StringContainer {
	pub fn new(data: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let len = data.len();
		Self {
			data: CowVec::new(data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.data.capacity().min(self.bitvec.capacity())
	}

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) {
			self.data.get(index).map(String::as_str)
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.count_ones() == self.len()
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn data(&self) -> &CowVec<String> {
		&self.data
	}

	pub fn as_string(&self, index: usize) -> String {
		if self.is_defined(index) {
			self.data[index].clone()
		} else {
			"Undefined".to_string()
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		if self.is_defined(index) {
			Value::Utf8(self.data[index].clone())
		} else {
			Value::Undefined
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(value, defined)| {
			if defined {
				Some(value.as_str())
			} else {
				None
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut container = StringContainer::with_capacity(3);
		container.push("a".to_string());
		container.push_undefined();
		container.push("c".to_string());

		assert_eq!(container.get(0), Some("a"));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some("c"));
	}

	#[test]
	fn test_get_value() {
		let container = StringContainer::from_vec(vec!["x".to_string()]);
		assert_eq!(container.get_value(0), Value::Utf8("x".to_string()));
		assert_eq!(container.get_value(1), Value::Undefined);
	}
}
