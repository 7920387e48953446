// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{RecordStore, SqliteConfig};
use tabula_testing::{
	fixture::{create_goods_table, seed_goods},
	tempdir::temp_dir,
};
use tabula_type::{Error, Value};

fn with_goods(f: impl FnOnce(&RecordStore)) {
	temp_dir(|dir| {
		let store = RecordStore::open(SqliteConfig::new(dir.join("store.db"))).unwrap();
		create_goods_table(store.connection());
		seed_goods(store.connection());
		f(&store);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_internal_tables_hidden() {
	with_goods(|store| {
		store.connection()
			.execute_batch(
				"CREATE TABLE counter (id INTEGER PRIMARY KEY AUTOINCREMENT, n INTEGER);
				 INSERT INTO counter (n) VALUES (1);",
			)
			.unwrap();

		let tables = store.list_tables().unwrap();
		assert_eq!(tables.iter().filter(|t| *t == "goods").count(), 1);
		assert_eq!(tables.iter().filter(|t| *t == "counter").count(), 1);
		assert!(tables.iter().all(|t| !t.starts_with("sqlite_")));
	});
}

#[test]
fn test_reads_are_deterministic() {
	with_goods(|store| {
		assert_eq!(store.list_columns("goods").unwrap(), store.list_columns("goods").unwrap());
		assert_eq!(store.fetch_all("goods").unwrap(), store.fetch_all("goods").unwrap());
	});
}

#[test]
fn test_insert_then_fetch() {
	with_goods(|store| {
		store.insert("goods", &["id", "name", "price"], &["5", "Lime", "0.3"]).unwrap();

		let rows = store.fetch_all("goods").unwrap();
		assert!(rows.contains(&vec![Value::Integer(5), Value::from("Lime"), Value::Real(0.3)]));
	});
}

#[test]
fn test_delete_then_fetch() {
	with_goods(|store| {
		assert_eq!(store.delete_by_key("goods", "id", "1").unwrap(), 1);
		assert_eq!(store.delete_by_key("goods", "id", "1").unwrap(), 0);

		let rows = store.fetch_all("goods").unwrap();
		assert!(rows.iter().all(|row| row[0] != Value::Integer(1)));
	});
}

#[test]
fn test_update_then_fetch() {
	with_goods(|store| {
		store.update_by_key("goods", &["id", "name", "price"], &["2", "Damson", "1.1"], "id", "2").unwrap();

		let rows = store.fetch_all("goods").unwrap();
		assert!(rows.contains(&vec![Value::Integer(2), Value::from("Damson"), Value::Real(1.1)]));
		assert!(!rows.iter().any(|row| row[1] == Value::from("Plum")));
	});
}

#[test]
fn test_unknown_table_is_reported() {
	with_goods(|store| {
		assert!(matches!(store.fetch_all("nope"), Err(Error::Query { .. })));
		assert!(matches!(store.insert("nope", &["id"], &["1"]), Err(Error::Write { .. })));
		assert!(matches!(store.update_by_key("nope", &["id"], &["1"], "id", "1"), Err(Error::Write { .. })));
		assert!(matches!(store.delete_by_key("nope", "id", "1"), Err(Error::Write { .. })));

		// still usable afterwards
		assert_eq!(store.fetch_all("goods").unwrap().len(), 2);
	});
}
