// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod list;

/// One table column as reported by `pragma_table_info`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
	pub name: String,
	pub index: ColumnIndex,
	/// Declared type, empty when the column was declared without one.
	pub ty: String,
	pub not_null: bool,
	pub default: Option<String>,
	/// Position inside the primary key, starting at 1; 0 when not part of it.
	pub key_ordinal: u16,
}

impl ColumnDescriptor {
	pub fn is_primary_key(&self) -> bool {
		self.key_ordinal > 0
	}
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash)]
pub struct ColumnIndex(pub u16);
