// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::Connection;
use tabula_type::SchemaError;

use crate::{Catalog, table::TableSchema};

impl Catalog {
	pub fn get_table(conn: &Connection, table: &str) -> crate::Result<TableSchema> {
		Catalog::find_table(conn, table)?.ok_or_else(|| {
			SchemaError::TableNotFound {
				table: table.to_string(),
			}
			.into()
		})
	}
}
