// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::SchemaError;

use crate::{column::ColumnDescriptor, identifier::quote};

mod find;
mod get;
mod list;

/// A table as read from the catalog during the current operation.
///
/// This is the only source of identifiers that may end up inside SQL text.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
	pub name: String,
	pub columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
	pub fn quoted_name(&self) -> String {
		quote(&self.name)
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
		self.columns.iter().find(|c| c.name == name)
	}

	/// Like [`TableSchema::column`] but fails with `UnknownColumn`.
	pub fn require_column(&self, name: &str) -> Result<&ColumnDescriptor, SchemaError> {
		self.column(name).ok_or_else(|| SchemaError::UnknownColumn {
			table: self.name.clone(),
			column: name.to_string(),
		})
	}

	/// The first primary key column. Composite keys are not supported, only
	/// the column at key position 1 is reported.
	pub fn primary_key(&self) -> Option<&ColumnDescriptor> {
		self.columns.iter().find(|c| c.key_ordinal == 1)
	}

	/// The column aliasing the rowid: a single-column key declared `INTEGER`.
	/// Only this column takes an engine-assigned value when bound to `NULL`.
	pub fn rowid_alias(&self) -> Option<&ColumnDescriptor> {
		let mut keys = self.columns.iter().filter(|c| c.is_primary_key());
		match (keys.next(), keys.next()) {
			(Some(key), None) if key.ty.eq_ignore_ascii_case("INTEGER") => Some(key),
			_ => None,
		}
	}
}
