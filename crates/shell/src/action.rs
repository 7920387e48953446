// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_form::{Form, Submission, build_create_form, build_delete_form, build_update_form};
use tabula_type::{Result, SchemaError};
use tracing::{debug, info, instrument, warn};

use crate::Shell;

impl Shell {
	/// Opens the add form for the selected table. Does nothing without a
	/// selected table.
	///
	/// Every `open_*` first dismisses an open form, so a failed open leaves
	/// no form behind.
	#[instrument(name = "shell::open_create", level = "debug", skip(self))]
	pub fn open_create(&mut self) -> Result<Option<&mut Form>> {
		let Some(table) = self.table.as_deref() else {
			return Ok(None);
		};
		self.form = None;

		let columns = self.store.list_columns(table)?;
		let names = columns.into_iter().map(|c| c.name).collect::<Vec<_>>();
		Ok(Some(self.form.insert(build_create_form(&names))))
	}

	/// Opens the change form. Fails with `NoPrimaryKey` when the selected
	/// table has no key to locate rows by.
	#[instrument(name = "shell::open_update", level = "debug", skip(self))]
	pub fn open_update(&mut self) -> Result<Option<&mut Form>> {
		let Some(table) = self.table.as_deref() else {
			return Ok(None);
		};
		self.form = None;

		let columns = self.store.list_columns(table)?;
		let key = self.require_primary_key(table)?;
		let names = columns.into_iter().map(|c| c.name).collect::<Vec<_>>();
		Ok(Some(self.form.insert(build_update_form(&names, &key))))
	}

	#[instrument(name = "shell::open_delete", level = "debug", skip(self))]
	pub fn open_delete(&mut self) -> Result<Option<&mut Form>> {
		let Some(table) = self.table.as_deref() else {
			return Ok(None);
		};
		self.form = None;

		let key = self.require_primary_key(table)?;
		Ok(Some(self.form.insert(build_delete_form(&key))))
	}

	/// Routes the open form to the store.
	///
	/// On success the form is dismissed and the grid refreshed. On failure
	/// the error is returned and the form stays open, inputs untouched.
	#[instrument(name = "shell::submit", level = "debug", skip(self))]
	pub fn submit(&mut self) -> Result<()> {
		let (Some(table), Some(form)) = (self.table.as_deref(), self.form.as_ref()) else {
			return Ok(());
		};
		let key_column = form.key_column().unwrap_or_default();

		let result = match form.submit() {
			Submission::Create(values) => self.store.insert(table, form.columns(), &values),
			Submission::Update {
				key_value,
				values,
			} => self.store.update_by_key(table, form.columns(), &values, key_column, &key_value).map(|_| ()),
			Submission::Delete {
				key_value,
			} => self.store.delete_by_key(table, key_column, &key_value).map(|_| ()),
		};

		if let Err(err) = result {
			warn!(error = %err, code = err.code(), "submission rejected");
			return Err(err);
		}

		info!(table, form = %form.kind(), "submission applied");
		self.form = None;
		self.refresh()
	}

	/// Dismisses the open form without touching the grid.
	pub fn cancel(&mut self) {
		if self.form.take().is_some() {
			debug!("form cancelled");
		}
	}

	fn require_primary_key(&self, table: &str) -> Result<String> {
		self.store.primary_key_of(table)?.ok_or_else(|| {
			SchemaError::NoPrimaryKey {
				table: table.to_string(),
			}
			.into()
		})
	}
}
