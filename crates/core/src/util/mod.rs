// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

mod bitvec;
mod cowvec;

pub use bitvec::{BitVec, BitVecIter};
pub use cowvec::CowVec;
