// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::params_from_iter;
use tabula_catalog::{Catalog, ColumnDescriptor, identifier::quote};
use tabula_type::{Error, Result};
use tracing::{debug, instrument, warn};

use crate::RecordStore;

impl RecordStore {
	/// Sets every column in `columns` to the matching entry of `values` on
	/// the rows where `key_column = key_value`.
	///
	/// The key column may be among `columns`; its new value is written as
	/// given, which changes the identity of the row. The filter always uses
	/// the old `key_value`.
	#[instrument(name = "store::sqlite::update", level = "debug", skip(self, columns, values))]
	pub fn update_by_key(
		&self,
		table: &str,
		columns: &[impl AsRef<str>],
		values: &[impl AsRef<str>],
		key_column: &str,
		key_value: &str,
	) -> Result<usize> {
		let schema = Catalog::get_table(&self.conn, table).map_err(|e| Error::write(table, e))?;

		if values.len() != columns.len() {
			return Err(Error::write(
				table,
				format!("{}: expected {} values, got {}", schema.name, columns.len(), values.len()),
			));
		}
		if columns.is_empty() {
			return Err(Error::write(table, "no columns to update"));
		}

		let targets = columns
			.iter()
			.map(|column| schema.require_column(column.as_ref()))
			.collect::<std::result::Result<Vec<&ColumnDescriptor>, _>>()
			.map_err(|e| Error::write(table, e))?;
		let key = schema.require_column(key_column).map_err(|e| Error::write(table, e))?;

		let assignments = targets.iter().map(|c| format!("{} = ?", quote(&c.name))).collect::<Vec<_>>().join(", ");
		let statement =
			format!("UPDATE {} SET {} WHERE {} = ?", schema.quoted_name(), assignments, quote(&key.name));

		let mut params = values.iter().map(|v| v.as_ref()).collect::<Vec<&str>>();
		params.push(key_value);

		match self.conn.execute(&statement, params_from_iter(params.iter())) {
			Ok(affected) => {
				debug!(affected, "updated");
				Ok(affected)
			}
			Err(e) => {
				warn!(error = %e, "update rejected");
				Err(Error::write(table, e))
			}
		}
	}
}
