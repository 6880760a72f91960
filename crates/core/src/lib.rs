// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

//! Value types, logical column types, validity-tracked column containers
//! and diagnostics. Everything here is data representation; operators over
//! columns live in `lacuna-engine`.

pub mod error;
pub mod util;
pub mod value;

pub use error::{Diagnostic, DiagnosticColumn, Error, Result, diagnostic};
pub use util::{BitVec, BitVecIter, CowVec};
pub use value::{
	Date, DateTime, Decimal, Duration, IntoValue, OrderedF32, OrderedF64, Time, TimeUnit, Type, Value,
	column::{Column, ColumnData, Push},
	container,
};
