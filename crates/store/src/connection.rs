// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite connection utilities.

use rusqlite::Connection;
use tabula_type::{Error, Result};

use crate::config::{DbPath, SqliteConfig};

fn connection_failed(path: &DbPath, error: impl ToString) -> Error {
	Error::Connection {
		path: path.to_string(),
		message: error.to_string(),
	}
}

/// Open the connection described by `config` and apply its pragmas.
pub(crate) fn open(config: &SqliteConfig) -> Result<Connection> {
	let conn = connect(&config.path)?;

	conn.busy_timeout(config.busy_timeout).map_err(|e| connection_failed(&config.path, e))?;
	conn.pragma_update(None, "foreign_keys", config.foreign_keys)
		.map_err(|e| connection_failed(&config.path, e))?;

	Ok(conn)
}

fn connect(path: &DbPath) -> Result<Connection> {
	match path {
		DbPath::File(file) => Connection::open(file).map_err(|e| connection_failed(path, e)),
		DbPath::Memory => Connection::open_in_memory().map_err(|e| connection_failed(path, e)),
	}
}
