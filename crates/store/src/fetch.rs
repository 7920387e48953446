// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_catalog::{Catalog, identifier::quote_all};
use tabula_type::{Error, Result, Row, Value};
use tracing::{debug, instrument};

use crate::RecordStore;

impl RecordStore {
	/// Every row of `table`, cells in catalog column order. No filtering,
	/// sorting or paging.
	#[instrument(name = "store::sqlite::fetch_all", level = "debug", skip(self))]
	pub fn fetch_all(&self, table: &str) -> Result<Vec<Row>> {
		let schema = Catalog::get_table(&self.conn, table).map_err(|e| Error::query(table, e))?;

		let query = format!("SELECT {} FROM {}", quote_all(schema.column_names()), schema.quoted_name());
		let width = schema.columns.len();

		let mut stmt = self.conn.prepare(&query).map_err(|e| Error::query(table, e))?;
		let rows = stmt
			.query_map([], |row| {
				(0..width).map(|idx| row.get_ref(idx).map(Value::from)).collect::<rusqlite::Result<Row>>()
			})
			.map_err(|e| Error::query(table, e))?
			.collect::<rusqlite::Result<Vec<Row>>>()
			.map_err(|e| Error::query(table, e))?;

		debug!(rows = rows.len(), "fetched");
		Ok(rows)
	}
}

#[cfg(test)]
mod tests {
	use rusqlite::Connection;
	use tabula_testing::fixture::{goods_connection, seeded_goods_connection};
	use tabula_type::{Error, Value};

	use crate::RecordStore;

	#[test]
	fn test_ok() {
		let store = RecordStore::from_connection(seeded_goods_connection());
		let rows = store.fetch_all("goods").unwrap();
		assert_eq!(
			rows,
			vec![
				vec![Value::Integer(1), Value::from("Pear"), Value::Real(0.75)],
				vec![Value::Integer(2), Value::from("Plum"), Value::Real(1.2)],
			]
		);
	}

	#[test]
	fn test_empty_table() {
		let store = RecordStore::from_connection(goods_connection());
		assert!(store.fetch_all("goods").unwrap().is_empty());
	}

	#[test]
	fn test_repeated_reads_are_identical() {
		let store = RecordStore::from_connection(seeded_goods_connection());
		assert_eq!(store.fetch_all("goods").unwrap(), store.fetch_all("goods").unwrap());
	}

	#[test]
	fn test_null_and_blob_cells() {
		let conn = Connection::open_in_memory().unwrap();
		conn.execute_batch("CREATE TABLE files (name TEXT, data BLOB); INSERT INTO files VALUES (NULL, x'CAFE');")
			.unwrap();
		let store = RecordStore::from_connection(conn);

		let rows = store.fetch_all("files").unwrap();
		assert_eq!(rows, vec![vec![Value::Null, Value::Blob(vec![0xca, 0xfe])]]);
	}

	#[test]
	fn test_quoted_identifiers() {
		let conn = Connection::open_in_memory().unwrap();
		conn.execute_batch(
			"CREATE TABLE \"order items\" (\"select\" INTEGER PRIMARY KEY, \"unit price\" REAL);
			 INSERT INTO \"order items\" VALUES (1, 9.5);",
		)
		.unwrap();
		let store = RecordStore::from_connection(conn);

		let rows = store.fetch_all("order items").unwrap();
		assert_eq!(rows, vec![vec![Value::Integer(1), Value::Real(9.5)]]);
	}

	#[test]
	fn test_table_does_not_exist() {
		let store = RecordStore::from_connection(goods_connection());
		let err = store.fetch_all("missing").unwrap_err();
		assert!(err.is_query());
		match err {
			Error::Query {
				table,
				..
			} => assert_eq!(table, "missing"),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn test_malformed_table_name() {
		let store = RecordStore::from_connection(goods_connection());
		assert!(store.fetch_all("goods WHERE 1=1; --").unwrap_err().is_query());
	}
}
