// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

/// Requested table or expected metadata is missing from the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
	#[error("table '{table}' does not exist")]
	TableNotFound {
		table: String,
	},

	#[error("table '{table}' has no primary key")]
	NoPrimaryKey {
		table: String,
	},

	#[error("column '{column}' does not exist in table '{table}'")]
	UnknownColumn {
		table: String,
		column: String,
	},
}

impl SchemaError {
	pub fn code(&self) -> &'static str {
		match self {
			SchemaError::TableNotFound {
				..
			} => "SCHEMA_001",
			SchemaError::NoPrimaryKey {
				..
			} => "SCHEMA_002",
			SchemaError::UnknownColumn {
				..
			} => "SCHEMA_003",
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Schema(#[from] SchemaError),

	/// Read failure, e.g. the table vanished between listing and query.
	#[error("failed to read table '{table}': {message}")]
	Query {
		table: String,
		message: String,
	},

	/// Statement rejected by the engine. `message` carries the engine text
	/// verbatim.
	#[error("{message}")]
	Write {
		table: String,
		message: String,
	},

	#[error("failed to open database at {path}: {message}")]
	Connection {
		path: String,
		message: String,
	},

	#[error(transparent)]
	Sqlite(#[from] rusqlite::Error),
}

impl Error {
	pub fn query(table: impl Into<String>, cause: impl Display) -> Self {
		Error::Query {
			table: table.into(),
			message: cause.to_string(),
		}
	}

	pub fn write(table: impl Into<String>, cause: impl Display) -> Self {
		Error::Write {
			table: table.into(),
			message: cause.to_string(),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Error::Schema(err) => err.code(),
			Error::Query {
				..
			} => "QUERY_001",
			Error::Write {
				..
			} => "WRITE_001",
			Error::Connection {
				..
			} => "CONNECTION_001",
			Error::Sqlite(_) => "SQLITE_001",
		}
	}

	pub fn is_schema(&self) -> bool {
		matches!(self, Error::Schema(_))
	}

	pub fn is_query(&self) -> bool {
		matches!(self, Error::Query { .. })
	}

	pub fn is_write(&self) -> bool {
		matches!(self, Error::Write { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_write_message_is_verbatim() {
		let err = Error::write("goods", "NOT NULL constraint failed: goods.name");
		assert_eq!(err.to_string(), "NOT NULL constraint failed: goods.name");
		assert_eq!(err.code(), "WRITE_001");
		assert!(err.is_write());
	}

	#[test]
	fn test_query_message_names_table() {
		let err = Error::query("missing", "no such table: missing");
		assert_eq!(err.to_string(), "failed to read table 'missing': no such table: missing");
		assert!(err.is_query());
	}

	#[test]
	fn test_schema_error_is_transparent() {
		let err: Error = SchemaError::TableNotFound {
			table: "goods".to_string(),
		}
		.into();
		assert_eq!(err.to_string(), "table 'goods' does not exist");
		assert_eq!(err.code(), "SCHEMA_001");
		assert!(err.is_schema());
	}

	#[test]
	fn test_schema_codes() {
		let no_pk = SchemaError::NoPrimaryKey {
			table: "log".to_string(),
		};
		let unknown = SchemaError::UnknownColumn {
			table: "goods".to_string(),
			column: "colour".to_string(),
		};
		assert_eq!(no_pk.code(), "SCHEMA_002");
		assert_eq!(unknown.code(), "SCHEMA_003");
		assert_eq!(unknown.to_string(), "column 'colour' does not exist in table 'goods'");
	}
}
