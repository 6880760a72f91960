// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::{Value, is::IsTemporal},
};

/// A temporal column buffer. The element type fixes the family (`Date`,
/// `DateTime`, `Time`, `Duration`); tick unit and time zone are column-type
/// metadata and live on the `ColumnData` variant, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemporalContainer<T>
where
	T: IsTemporal,
{
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T> TemporalContainer<T>
where
	T: IsTemporal,
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

impl<T> Default for TemporalContainer<T>
where
	T: IsTemporal,
{
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{Date, Duration, Time};

	#[test]
	fn test_date_container() {
		let dates = vec![Date::new(2023, 1, 1).unwrap(), Date::new(2023, 6, 15).unwrap()];
		let container = TemporalContainer::from_vec(dates.clone());

		assert_eq!(container.len(), 2);
		assert_eq!(container.get(0), Some(&dates[0]));
		assert_eq!(container.get(1), Some(&dates[1]));
		assert!(container.is_fully_defined());
	}

	#[test]
	fn test_push_undefined() {
		let mut container: TemporalContainer<Date> = TemporalContainer::with_capacity(3);
		container.push(Date::new(2020, 1, 1).unwrap());
		container.push_undefined();
		container.push(Date::new(2020, 1, 3).unwrap());

		assert_eq!(container.get(1), None);
		assert!(!container.is_defined(1));
		assert_eq!(container.as_string(1), "Undefined");
	}

	#[test]
	fn test_time_get_value() {
		let mut container: TemporalContainer<Time> = TemporalContainer::with_capacity(2);
		container.push(Time::from_hms(1, 30, 0).unwrap());
		container.push_undefined();

		assert_eq!(container.get_value(0), Value::Time(Time::from_hms(1, 30, 0).unwrap()));
		assert_eq!(container.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_duration_iter() {
		let mut container: TemporalContainer<Duration> = TemporalContainer::with_capacity(3);
		container.push(Duration::from_millis(100).unwrap());
		container.push_undefined();
		container.push(Duration::from_millis(300).unwrap());

		let collected: Vec<Option<Duration>> = container.iter().collect();
		assert_eq!(collected[0], Some(Duration::from_millis(100).unwrap()));
		assert_eq!(collected[1], None);
	}

	#[test]
	fn test_default_is_empty() {
		let container: TemporalContainer<Date> = TemporalContainer::default();
		assert!(container.is_empty());
	}
}
