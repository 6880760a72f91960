// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::{
	fmt::{self, Debug},
	ops::Deref,
	sync::Arc,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A copy-on-write vector. Cloning is a reference-count bump; the buffer is
/// copied only when a shared instance is mutated. Column containers build on
/// this so that returning a new column never copies unchanged buffers.
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			inner: Arc::new(data),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Vec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.inner.get(index)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.inner.iter()
	}
}

impl<T: Clone> CowVec<T> {
	pub fn push(&mut self, value: T) {
		Arc::make_mut(&mut self.inner).push(value);
	}

	pub fn clear(&mut self) {
		Arc::make_mut(&mut self.inner).clear();
	}
}

impl<T> Clone for CowVec<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.inner.as_slice()
	}
}

impl<T: PartialEq> PartialEq for CowVec<T> {
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T: Debug> Debug for CowVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.inner.fmt(f)
	}
}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T: Serialize> Serialize for CowVec<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.inner.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowVec<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(Self::new(Vec::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;

	#[test]
	fn test_new_and_get() {
		let vec = CowVec::new(vec![1, 2, 3]);
		assert_eq!(vec.len(), 3);
		assert_eq!(vec.get(0), Some(&1));
		assert_eq!(vec.get(3), None);
	}

	#[test]
	fn test_clone_shares_buffer() {
		let vec = CowVec::new(vec![1, 2, 3]);
		let clone = vec.clone();
		assert!(Arc::ptr_eq(&vec.inner, &clone.inner));
	}

	#[test]
	fn test_push_on_shared_copies() {
		let vec = CowVec::new(vec![1, 2]);
		let mut clone = vec.clone();
		clone.push(3);

		assert_eq!(vec.as_slice(), &[1, 2]);
		assert_eq!(clone.as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn test_deref() {
		let vec = CowVec::new(vec![10, 20, 30]);
		assert_eq!(vec[1], 20);
		assert_eq!(vec.iter().copied().sum::<i32>(), 60);
	}

	#[test]
	fn test_serde_roundtrip() {
		let vec = CowVec::new(vec![1.5f64, 2.5]);
		let json = serde_json::to_string(&vec).unwrap();
		assert_eq!(json, "[1.5,2.5]");

		let recovered: CowVec<f64> = serde_json::from_str(&json).unwrap();
		assert_eq!(vec, recovered);
	}
}
