// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::Connection;

use crate::Catalog;

impl Catalog {
	/// Name of the primary key column of `table`, if it has one.
	///
	/// For a composite key only the first key column is returned.
	pub fn primary_key_of(conn: &Connection, table: &str) -> crate::Result<Option<String>> {
		let schema = Catalog::get_table(conn, table)?;
		Ok(schema.primary_key().map(|c| c.name.clone()))
	}
}
