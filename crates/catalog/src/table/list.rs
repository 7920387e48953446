// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::Connection;
use tracing::instrument;

use crate::Catalog;

/// Engine bookkeeping tables such as `sqlite_sequence` or `sqlite_stat1`.
pub(crate) fn is_internal(name: &str) -> bool {
	name.starts_with("sqlite_")
}

impl Catalog {
	/// User tables in the order the catalog reports them.
	#[instrument(name = "catalog::list_tables", level = "trace", skip(conn))]
	pub fn list_tables(conn: &Connection) -> crate::Result<Vec<String>> {
		let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;

		let names = stmt
			.query_map([], |row| row.get::<_, String>(0))?
			.collect::<rusqlite::Result<Vec<_>>>()?
			.into_iter()
			.filter(|name| !is_internal(name))
			.collect();

		Ok(names)
	}
}
