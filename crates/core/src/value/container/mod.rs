// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

mod bool;
mod decimal;
mod number;
mod temporal;
mod undefined;
mod utf8;

pub use bool::BoolContainer;
pub use decimal::DecimalContainer;
pub use number::NumberContainer;
pub use temporal::TemporalContainer;
pub use undefined::UndefinedContainer;
pub use utf8::StringContainer;
