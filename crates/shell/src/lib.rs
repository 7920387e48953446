// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Event handling for the browser front-end.
//!
//! The shell moves between three states:
//!
//! ```text
//! NoTableSelected --select--> TableSelected --add/update/delete--> FormOpen
//!                                   ^                                 |
//!                                   +------ submit ok / cancel -------+
//! ```
//!
//! A rejected submission keeps the form open with its inputs intact. Every
//! grid refresh re-queries the database.

mod action;

use tabula_form::Form;
use tabula_grid::Grid;
use tabula_store::RecordStore;
use tabula_type::Result;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
	NoTableSelected,
	TableSelected,
	FormOpen,
}

pub struct Shell {
	store: RecordStore,
	grid: Grid,
	table: Option<String>,
	form: Option<Form>,
}

impl Shell {
	pub fn new(store: RecordStore) -> Self {
		Self {
			store,
			grid: Grid::new(),
			table: None,
			form: None,
		}
	}

	pub fn state(&self) -> State {
		match (&self.table, &self.form) {
			(_, Some(_)) => State::FormOpen,
			(Some(_), None) => State::TableSelected,
			(None, None) => State::NoTableSelected,
		}
	}

	pub fn store(&self) -> &RecordStore {
		&self.store
	}

	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	pub fn selected_table(&self) -> Option<&str> {
		self.table.as_deref()
	}

	pub fn form(&self) -> Option<&Form> {
		self.form.as_ref()
	}

	pub fn form_mut(&mut self) -> Option<&mut Form> {
		self.form.as_mut()
	}

	/// Tables the user can pick from.
	pub fn tables(&self) -> Result<Vec<String>> {
		self.store.list_tables()
	}

	/// Selects `table` and refreshes the grid. An open form is discarded.
	///
	/// An unknown table is reported and leaves the current selection alone.
	#[instrument(name = "shell::select_table", level = "debug", skip(self))]
	pub fn select_table(&mut self, table: &str) -> Result<()> {
		let schema = self.store.table_schema(table)?;

		if self.form.take().is_some() {
			debug!("open form discarded");
		}

		info!(table = %schema.name, "table selected");
		self.table = Some(schema.name);
		self.refresh()
	}

	/// Re-reads the selected table into the grid.
	///
	/// The grid is cleared first, so a failed read leaves it empty. A table
	/// that disappeared from the catalog is not reported; a failing read is.
	#[instrument(name = "shell::refresh", level = "debug", skip(self))]
	pub fn refresh(&mut self) -> Result<()> {
		self.grid.clear();

		let Some(table) = self.table.as_deref() else {
			return Ok(());
		};

		let columns = match self.store.list_columns(table) {
			Ok(columns) => columns,
			Err(err) if err.is_schema() => {
				debug!(error = %err, code = err.code(), "refresh aborted");
				return Ok(());
			}
			Err(err) => return Err(err),
		};

		let rows = self.store.fetch_all(table)?;
		self.grid.render(columns.into_iter().map(|c| c.name), rows);
		Ok(())
	}
}
