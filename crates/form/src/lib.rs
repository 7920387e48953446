// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Input forms derived from a column list.
//!
//! A [`Form`] is a list of labeled inputs addressed by [`FieldId`] plus a
//! [`Form::submit`] that collects the inputs back into positional values. It
//! knows nothing about any specific table.

mod builder;

use std::fmt::{self, Display, Formatter};

pub use builder::{build_create_form, build_delete_form, build_update_form};
use tabula_type::RecordValues;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
	/// Locates the row to change or delete.
	Key,
	/// One of the table's columns, by position.
	Column(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	pub label: String,
	pub input: String,
	pub role: FieldRole,
}

impl Field {
	fn new(label: impl Into<String>, role: FieldRole) -> Self {
		Self {
			label: label.into(),
			input: String::new(),
			role,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormKind {
	Create,
	Update {
		key_column: String,
	},
	Delete {
		key_column: String,
	},
}

impl Display for FormKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FormKind::Create => f.write_str("Add record"),
			FormKind::Update {
				..
			} => f.write_str("Change record"),
			FormKind::Delete {
				..
			} => f.write_str("Delete record"),
		}
	}
}

/// What a form yields when confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
	Create(RecordValues),
	Update {
		key_value: String,
		values: RecordValues,
	},
	Delete {
		key_value: String,
	},
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
	kind: FormKind,
	columns: Vec<String>,
	fields: Vec<Field>,
}

impl Form {
	pub fn kind(&self) -> &FormKind {
		&self.kind
	}

	pub fn title(&self) -> String {
		self.kind.to_string()
	}

	/// Columns the collected values line up with.
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn key_column(&self) -> Option<&str> {
		match &self.kind {
			FormKind::Create => None,
			FormKind::Update {
				key_column,
			}
			| FormKind::Delete {
				key_column,
			} => Some(key_column),
		}
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + use<> {
		(0..self.fields.len()).map(FieldId)
	}

	pub fn field(&self, id: FieldId) -> Option<&Field> {
		self.fields.get(id.0)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn value(&self, id: FieldId) -> Option<&str> {
		self.fields.get(id.0).map(|f| f.input.as_str())
	}

	/// Replaces the input of `id`. Returns false when `id` is not a field of
	/// this form.
	pub fn set(&mut self, id: FieldId, value: impl Into<String>) -> bool {
		match self.fields.get_mut(id.0) {
			Some(field) => {
				field.input = value.into();
				true
			}
			None => false,
		}
	}

	/// Collects the inputs. The form keeps its inputs, so a rejected
	/// submission can be edited and confirmed again.
	pub fn submit(&self) -> Submission {
		let key_value = || {
			self.fields.iter().find(|f| f.role == FieldRole::Key).map(|f| f.input.clone()).unwrap_or_default()
		};

		let mut values = vec![String::new(); self.columns.len()];
		for field in &self.fields {
			if let FieldRole::Column(idx) = field.role {
				values[idx] = field.input.clone();
			}
		}

		match self.kind {
			FormKind::Create => Submission::Create(values),
			FormKind::Update {
				..
			} => Submission::Update {
				key_value: key_value(),
				values,
			},
			FormKind::Delete {
				..
			} => Submission::Delete {
				key_value: key_value(),
			},
		}
	}
}
