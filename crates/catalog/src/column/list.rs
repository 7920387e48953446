// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::{Connection, params};
use tracing::instrument;

use crate::{
	Catalog,
	column::{ColumnDescriptor, ColumnIndex},
};

impl Catalog {
	/// Columns of `table` in definition order.
	pub fn list_columns(conn: &Connection, table: &str) -> crate::Result<Vec<ColumnDescriptor>> {
		Ok(Catalog::get_table(conn, table)?.columns)
	}

	/// Raw `pragma_table_info` read. The table name is bound, never
	/// interpolated; an unknown table yields an empty list.
	#[instrument(name = "catalog::table_info", level = "trace", skip(conn))]
	pub(crate) fn table_info(conn: &Connection, table: &str) -> crate::Result<Vec<ColumnDescriptor>> {
		let mut stmt = conn.prepare(
			"SELECT cid, name, type, \"notnull\", dflt_value, pk FROM pragma_table_info(?1) ORDER BY cid",
		)?;

		let columns = stmt
			.query_map(params![table], |row| {
				Ok(ColumnDescriptor {
					index: ColumnIndex(row.get::<_, u16>(0)?),
					name: row.get(1)?,
					ty: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
					not_null: row.get::<_, i64>(3)? != 0,
					default: row.get(4)?,
					key_ordinal: row.get::<_, u16>(5)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(columns)
	}
}
