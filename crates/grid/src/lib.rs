// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod display;

use tabula_type::Row;

/// Read-only grid: one header per column, one line per record.
///
/// Every [`Grid::render`] replaces the whole content; there is no sorting,
/// filtering or paging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
	columns: Vec<String>,
	rows: Vec<Row>,
}

impl Grid {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn render(&mut self, columns: impl IntoIterator<Item = impl Into<String>>, rows: Vec<Row>) {
		self.columns = columns.into_iter().map(Into::into).collect();
		self.rows = rows;
	}

	pub fn clear(&mut self) {
		self.columns.clear();
		self.rows.clear();
	}

	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::Value;

	use super::*;

	#[test]
	fn test_render_replaces_content() {
		let mut grid = Grid::new();
		grid.render(["id", "name"], vec![vec![Value::Integer(1), Value::from("Pear")]]);
		grid.render(["code"], vec![vec![Value::from("EUR")], vec![Value::from("USD")]]);

		assert_eq!(grid.columns(), ["code"]);
		assert_eq!(grid.rows().len(), 2);
	}

	#[test]
	fn test_rows_keep_order() {
		let mut grid = Grid::new();
		let rows = vec![vec![Value::Integer(3)], vec![Value::Integer(1)], vec![Value::Integer(2)]];
		grid.render(["id"], rows.clone());
		assert_eq!(grid.rows(), rows.as_slice());
	}

	#[test]
	fn test_clear() {
		let mut grid = Grid::new();
		grid.render(["id"], vec![vec![Value::Integer(1)]]);
		grid.clear();
		assert!(grid.is_empty());
		assert!(grid.rows().is_empty());
	}
}
