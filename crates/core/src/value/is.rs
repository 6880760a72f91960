// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use std::fmt::{Debug, Display};

use crate::value::{Date, DateTime, Duration, Time, into::IntoValue};

pub trait IsNumber: Display + Copy + Debug + Default + PartialEq + PartialOrd + IntoValue {}
pub trait IsTemporal: Display + Copy + Debug + Default + PartialEq + PartialOrd + Ord + IntoValue {}

pub trait IsFloat: IsNumber {}

impl IsNumber for f32 {}
impl IsFloat for f32 {}

impl IsNumber for f64 {}
impl IsFloat for f64 {}

pub trait IsInt: IsNumber {}

impl IsNumber for i8 {}
impl IsInt for i8 {}

impl IsNumber for i16 {}
impl IsInt for i16 {}

impl IsNumber for i32 {}
impl IsInt for i32 {}

impl IsNumber for i64 {}
impl IsInt for i64 {}

impl IsNumber for i128 {}
impl IsInt for i128 {}

pub trait IsUint: IsNumber {}

impl IsNumber for u8 {}
impl IsUint for u8 {}

impl IsNumber for u16 {}
impl IsUint for u16 {}

impl IsNumber for u32 {}
impl IsUint for u32 {}

impl IsNumber for u64 {}
impl IsUint for u64 {}

impl IsNumber for u128 {}
impl IsUint for u128 {}

impl IsTemporal for Date {}
impl IsTemporal for DateTime {}
impl IsTemporal for Time {}
impl IsTemporal for Duration {}
