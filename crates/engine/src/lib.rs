// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

//! The interpolation operator and its expression surface.
//!
//! `interpolate` fills interior undefined runs of a single column;
//! `evaluate`/`Schema::resolve` are the eager and lazy halves of the
//! expression seam, and are guaranteed to agree on output types.

pub mod evaluate;
pub mod interpolate;

pub use evaluate::{ColumnExpression, Expression, InterpolateExpression, Schema, SchemaColumn, evaluate};
pub use interpolate::{InterpolationMethod, interpolate, resolve_output_type};
