// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Canned schemas shared by the test suites.

use rusqlite::Connection;

pub const GOODS_SCHEMA: &str = "CREATE TABLE goods (id INTEGER PRIMARY KEY, name TEXT, price REAL)";

pub fn create_goods_table(conn: &Connection) {
	conn.execute_batch(GOODS_SCHEMA).unwrap();
}

/// Inserts `(1, Pear, 0.75)` and `(2, Plum, 1.2)`.
pub fn seed_goods(conn: &Connection) {
	conn.execute_batch(
		"INSERT INTO goods (id, name, price) VALUES (1, 'Pear', 0.75);
		 INSERT INTO goods (id, name, price) VALUES (2, 'Plum', 1.2);",
	)
	.unwrap();
}

/// In-memory connection holding an empty `goods` table.
pub fn goods_connection() -> Connection {
	let conn = Connection::open_in_memory().unwrap();
	create_goods_table(&conn);
	conn
}

/// In-memory connection holding a seeded `goods` table.
pub fn seeded_goods_connection() -> Connection {
	let conn = goods_connection();
	seed_goods(&conn);
	conn
}
