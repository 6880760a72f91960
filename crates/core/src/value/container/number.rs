// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::{Value, is::IsNumber},
};

/// A numeric column buffer: one native value per row plus a validity bit.
/// Undefined rows keep a default value in the data buffer so positions stay
/// aligned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(data: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
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

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
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

	pub fn data(&self) -> &CowVec<T> {
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
			self.data[index].into_value()
		} else {
			Value::Undefined
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(&value, defined)| {
			if defined {
				Some(value)
			} else {
				None
			}
		})
	}
}
