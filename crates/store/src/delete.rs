// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::params;
use tabula_catalog::{Catalog, identifier::quote};
use tabula_type::{Error, Result};
use tracing::{debug, instrument, warn};

use crate::RecordStore;

impl RecordStore {
	/// Deletes the rows where `key_column = key_value`. Deleting a key that
	/// does not exist is not an error; the affected row count is returned.
	#[instrument(name = "store::sqlite::delete", level = "debug", skip(self))]
	pub fn delete_by_key(&self, table: &str, key_column: &str, key_value: &str) -> Result<usize> {
		let schema = Catalog::get_table(&self.conn, table).map_err(|e| Error::write(table, e))?;
		let key = schema.require_column(key_column).map_err(|e| Error::write(table, e))?;

		let statement = format!("DELETE FROM {} WHERE {} = ?1", schema.quoted_name(), quote(&key.name));

		match self.conn.execute(&statement, params![key_value]) {
			Ok(affected) => {
				debug!(affected, "deleted");
				Ok(affected)
			}
			Err(e) => {
				warn!(error = %e, "delete rejected");
				Err(Error::write(table, e))
			}
		}
	}
}
