// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

pub mod diagnostic;

use std::fmt::{Display, Formatter};

pub use diagnostic::{Diagnostic, DiagnosticColumn};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.0.code, self.0.message)
	}
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::error::diagnostic::query::column_not_found;

	#[test]
	fn test_display_renders_code_and_message() {
		let err = crate::error!(column_not_found("speed"));
		assert_eq!(err.to_string(), "QUERY_001: Column 'speed' not found");
	}

	#[test]
	fn test_code() {
		let err = crate::error!(column_not_found("speed"));
		assert_eq!(err.code(), "QUERY_001");
	}
}
