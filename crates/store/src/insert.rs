// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::params_from_iter;
use tabula_catalog::{Catalog, ColumnDescriptor, identifier::quote_all};
use tabula_type::{Error, Result};
use tracing::{debug, instrument, warn};

use crate::{RecordStore, placeholders};

impl RecordStore {
	/// Inserts one record, binding `values` positionally to `columns`.
	///
	/// A blank value for an `INTEGER PRIMARY KEY` column is bound as `NULL`
	/// so the engine assigns the key. Everything else, blank keys of any
	/// other type included, is bound verbatim as text and left to the column
	/// affinity.
	#[instrument(name = "store::sqlite::insert", level = "debug", skip(self, columns, values))]
	pub fn insert(&self, table: &str, columns: &[impl AsRef<str>], values: &[impl AsRef<str>]) -> Result<()> {
		let schema = Catalog::get_table(&self.conn, table).map_err(|e| Error::write(table, e))?;

		if values.len() != columns.len() {
			return Err(Error::write(
				table,
				format!("{}: expected {} values, got {}", schema.name, columns.len(), values.len()),
			));
		}

		let targets = columns
			.iter()
			.map(|column| schema.require_column(column.as_ref()))
			.collect::<std::result::Result<Vec<&ColumnDescriptor>, _>>()
			.map_err(|e| Error::write(table, e))?;

		let rowid_alias = schema.rowid_alias().map(|c| c.name.as_str());
		let params = targets
			.iter()
			.zip(values)
			.map(|(column, value)| {
				let value: &str = value.as_ref();
				if value.is_empty() && rowid_alias == Some(column.name.as_str()) {
					None
				} else {
					Some(value)
				}
			})
			.collect::<Vec<Option<&str>>>();

		let statement = if targets.is_empty() {
			format!("INSERT INTO {} DEFAULT VALUES", schema.quoted_name())
		} else {
			format!(
				"INSERT INTO {} ({}) VALUES ({})",
				schema.quoted_name(),
				quote_all(targets.iter().map(|c| c.name.as_str())),
				placeholders(targets.len())
			)
		};

		match self.conn.execute(&statement, params_from_iter(params.iter())) {
			Ok(_) => {
				debug!(rowid = self.conn.last_insert_rowid(), "inserted");
				Ok(())
			}
			Err(e) => {
				warn!(error = %e, "insert rejected");
				Err(Error::write(table, e))
			}
		}
	}
}
