// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The record store owns the one database connection and is the only
//! component issuing SQL against it.
//!
//! Every operation re-reads the table schema from the catalog first. Table and
//! column names from the caller are checked against that schema before they
//! are quoted into SQL text; values are always bound parameters. Each
//! statement runs in autocommit mode, so a successful call is already
//! committed when it returns.

mod config;
mod connection;
mod delete;
mod fetch;
mod insert;
mod update;

pub use config::{DbPath, SqliteConfig};
use rusqlite::Connection;
use tabula_catalog::{Catalog, ColumnDescriptor, TableSchema};
use tabula_type::Result;
use tracing::instrument;

pub struct RecordStore {
	conn: Connection,
	path: DbPath,
}

impl RecordStore {
	#[instrument(name = "store::sqlite::open", level = "info", skip(config), fields(
		db_path = %config.path
	))]
	pub fn open(config: SqliteConfig) -> Result<Self> {
		let conn = connection::open(&config)?;
		Ok(Self {
			conn,
			path: config.path,
		})
	}

	pub fn in_memory() -> Result<Self> {
		Self::open(SqliteConfig::in_memory())
	}

	/// Wraps an already open connection.
	pub fn from_connection(conn: Connection) -> Self {
		let path = match conn.path() {
			Some(p) if !p.is_empty() => DbPath::File(p.into()),
			_ => DbPath::Memory,
		};
		Self {
			conn,
			path,
		}
	}

	pub fn path(&self) -> &DbPath {
		&self.path
	}

	pub fn connection(&self) -> &Connection {
		&self.conn
	}

	pub fn list_tables(&self) -> Result<Vec<String>> {
		Catalog::list_tables(&self.conn)
	}

	pub fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
		Catalog::list_columns(&self.conn, table)
	}

	pub fn primary_key_of(&self, table: &str) -> Result<Option<String>> {
		Catalog::primary_key_of(&self.conn, table)
	}

	pub fn table_schema(&self, table: &str) -> Result<TableSchema> {
		Catalog::get_table(&self.conn, table)
	}
}

/// `?` placeholders for `count` bound values.
pub(crate) fn placeholders(count: usize) -> String {
	vec!["?"; count].join(",")
}
