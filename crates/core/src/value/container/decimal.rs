// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::{Decimal, Value},
};

/// A fixed-point decimal column buffer. The column's scale lives on the
/// `ColumnData` variant; every defined value held here is exactly
/// representable at that scale with a 128-bit unscaled integer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecimalContainer {
	data: CowVec<Decimal>,
	bitvec: BitVec,
}

impl DecimalContainer {
	pub fn new(data: Vec<Decimal>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<Decimal>) -> Self {
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

	pub fn push(&mut self, value: Decimal) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(Decimal::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&Decimal> {
		if self.is_defined(index) {
			self.data.get(index)
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

	pub fn data(&self) -> &CowVec<Decimal> {
		&self.data
	}

	pub fn as_string(&self, index: usize) -> String {
		if self.is_defined(index) {
			self.data[index].to_string()
		} else {
			"Undefined".to_string()
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		if self.is_defined(index) {
			Value::Decimal(self.data[index].clone())
		} else {
			Value::Undefined
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&Decimal>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(value, defined)| {
			if defined {
				Some(value)
			} else {
				None
			}
		})
	}
}
