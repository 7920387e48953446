// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::Path;

use tabula_shell::{Shell, State};
use tabula_store::{RecordStore, SqliteConfig};
use tabula_testing::{
	fixture::{create_goods_table, seed_goods},
	tempdir::temp_dir,
};
use tabula_type::{Row, Value};

fn open(dir: &Path) -> RecordStore {
	RecordStore::open(SqliteConfig::new(dir.join("goods.db"))).unwrap()
}

fn seeded_shell(dir: &Path) -> Shell {
	let store = open(dir);
	create_goods_table(store.connection());
	seed_goods(store.connection());
	Shell::new(store)
}

fn fill(shell: &mut Shell, inputs: &[&str]) {
	let form = shell.form_mut().unwrap();
	let ids: Vec<_> = form.field_ids().collect();
	for (id, input) in ids.into_iter().zip(inputs) {
		form.set(id, *input);
	}
}

fn row_with_key(rows: &[Row], key: i64) -> Option<&Row> {
	rows.iter().find(|row| row[0] == Value::Integer(key))
}

#[test]
fn test_goods_scenario() {
	temp_dir(|dir| {
		let mut shell = seeded_shell(dir);
		assert_eq!(shell.tables().unwrap(), vec!["goods"]);

		let columns = shell.store().list_columns("goods").unwrap();
		let shape: Vec<_> = columns.iter().map(|c| (c.name.as_str(), c.is_primary_key())).collect();
		assert_eq!(shape, vec![("id", true), ("name", false), ("price", false)]);

		shell.select_table("goods").unwrap();
		assert_eq!(shell.state(), State::TableSelected);

		// add with the key left blank
		shell.open_create().unwrap();
		fill(&mut shell, &["", "Apple", "1.50"]);
		shell.submit().unwrap();

		let apple = shell.grid().rows().iter().find(|row| row[1] == Value::from("Apple")).cloned().unwrap();
		let Value::Integer(apple_id) = apple[0] else {
			panic!("expected an engine-assigned integer id, got {:?}", apple[0]);
		};
		assert_eq!(apple[2], Value::Real(1.5));

		// delete it again
		shell.open_delete().unwrap();
		fill(&mut shell, &[&apple_id.to_string()]);
		shell.submit().unwrap();
		assert!(row_with_key(shell.grid().rows(), apple_id).is_none());

		// reprice a remaining row, keeping its id
		shell.open_update().unwrap();
		fill(&mut shell, &["2", "2", "Plum", "2.00"]);
		shell.submit().unwrap();

		let plum = row_with_key(shell.grid().rows(), 2).unwrap();
		assert_eq!(plum[2], Value::Real(2.0));
		assert_eq!(plum[2].to_string(), "2.0");
		assert_eq!(shell.grid().rows().len(), 2);

		Ok(())
	})
	.unwrap();
}

#[test]
fn test_writes_survive_reopen() {
	temp_dir(|dir| {
		{
			let mut shell = seeded_shell(dir);
			shell.select_table("goods").unwrap();
			shell.open_create().unwrap();
			fill(&mut shell, &["7", "Fig", "3"]);
			shell.submit().unwrap();
		}

		let store = open(dir);
		let rows = store.fetch_all("goods").unwrap();
		assert_eq!(rows.len(), 3);
		assert_eq!(row_with_key(&rows, 7).unwrap()[1], Value::from("Fig"));

		Ok(())
	})
	.unwrap();
}

#[test]
fn test_rejected_write_then_corrected() {
	temp_dir(|dir| {
		let mut shell = seeded_shell(dir);
		shell.select_table("goods").unwrap();

		shell.open_create().unwrap();
		fill(&mut shell, &["1", "Quince", "2"]);
		let err = shell.submit().unwrap_err();
		assert!(err.is_write());
		assert_eq!(shell.state(), State::FormOpen);

		fill(&mut shell, &["3", "Quince", "2"]);
		shell.submit().unwrap();
		assert_eq!(shell.state(), State::TableSelected);
		assert_eq!(row_with_key(shell.grid().rows(), 3).unwrap()[1], Value::from("Quince"));

		Ok(())
	})
	.unwrap();
}

#[test]
fn test_update_overwriting_key_moves_row() {
	temp_dir(|dir| {
		let mut shell = seeded_shell(dir);
		shell.select_table("goods").unwrap();

		shell.open_update().unwrap();
		fill(&mut shell, &["1", "10", "Pear", "0.80"]);
		shell.submit().unwrap();

		let rows = shell.grid().rows();
		assert!(row_with_key(rows, 1).is_none());
		assert_eq!(row_with_key(rows, 10).unwrap()[2], Value::Real(0.8));

		Ok(())
	})
	.unwrap();
}
