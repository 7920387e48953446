// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Field, FieldRole, Form, FormKind};

fn column_names(columns: &[impl AsRef<str>]) -> Vec<String> {
	columns.iter().map(|c| c.as_ref().to_string()).collect()
}

fn column_fields(columns: &[String]) -> impl Iterator<Item = Field> + '_ {
	columns.iter().enumerate().map(|(idx, name)| Field::new(name.clone(), FieldRole::Column(idx)))
}

/// One blank input per column, in column order.
pub fn build_create_form(columns: &[impl AsRef<str>]) -> Form {
	let columns = column_names(columns);
	let fields = column_fields(&columns).collect();

	Form {
		kind: FormKind::Create,
		columns,
		fields,
	}
}

/// A key input locating the row, followed by one blank input per column.
/// Inputs are never pre-filled from the existing row.
pub fn build_update_form(columns: &[impl AsRef<str>], key_column: &str) -> Form {
	let columns = column_names(columns);
	let mut fields = Vec::with_capacity(columns.len() + 1);
	fields.push(Field::new(format!("{key_column} of row to change"), FieldRole::Key));
	fields.extend(column_fields(&columns));

	Form {
		kind: FormKind::Update {
			key_column: key_column.to_string(),
		},
		columns,
		fields,
	}
}

/// A single key input.
pub fn build_delete_form(key_column: &str) -> Form {
	Form {
		kind: FormKind::Delete {
			key_column: key_column.to_string(),
		},
		columns: vec![],
		fields: vec![Field::new(format!("{key_column} ="), FieldRole::Key)],
	}
}
