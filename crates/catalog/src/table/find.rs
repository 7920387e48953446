// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::Connection;
use tracing::instrument;

use crate::{Catalog, table::TableSchema};

impl Catalog {
	/// Looks `table` up by exact name among the listed user tables.
	#[instrument(name = "catalog::find_table", level = "trace", skip(conn))]
	pub fn find_table(conn: &Connection, table: &str) -> crate::Result<Option<TableSchema>> {
		let Some(name) = Catalog::list_tables(conn)?.into_iter().find(|name| name == table) else {
			return Ok(None);
		};

		let columns = Catalog::table_info(conn, &name)?;
		if columns.is_empty() {
			return Ok(None);
		}

		Ok(Some(TableSchema {
			name,
			columns,
		}))
	}
}
