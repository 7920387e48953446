// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use tabula_type::Value;
use unicode_width::UnicodeWidthStr;

use crate::Grid;

/// Terminal columns taken by `s`. Callers escape control characters first.
fn display_width(s: &str) -> usize {
	s.width()
}

/// Escape newlines and tabs in a string for single-line display.
fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn header(name: &str) -> String {
	escape_control_chars(name)
}

fn cell(row: &[Value], col_idx: usize) -> String {
	row.get(col_idx).map(|v| escape_control_chars(&v.as_string())).unwrap_or_default()
}

fn centered(s: &str, width: usize) -> String {
	let pad = width.saturating_sub(display_width(s));
	let l = pad / 2;
	let r = pad - l;
	format!(" {:left$}{}{:right$} ", "", s, "", left = l, right = r)
}

impl Display for Grid {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.columns.is_empty() {
			return Ok(());
		}

		let mut col_widths: Vec<usize> = self.columns.iter().map(|name| display_width(&header(name))).collect();

		for row in &self.rows {
			for (col_idx, width) in col_widths.iter_mut().enumerate() {
				*width = (*width).max(display_width(&cell(row, col_idx)));
			}
		}

		// Add padding
		for w in &mut col_widths {
			*w += 2;
		}

		let sep = format!("+{}+", col_widths.iter().map(|w| "-".repeat(*w + 2)).collect::<Vec<_>>().join("+"));
		writeln!(f, "{}", sep)?;

		let header = self
			.columns
			.iter()
			.zip(&col_widths)
			.map(|(name, w)| centered(&header(name), *w))
			.collect::<Vec<_>>();
		writeln!(f, "|{}|", header.join("|"))?;

		writeln!(f, "{}", sep)?;

		for row in &self.rows {
			let line = col_widths
				.iter()
				.enumerate()
				.map(|(col_idx, w)| centered(&cell(row, col_idx), *w))
				.collect::<Vec<_>>();
			writeln!(f, "|{}|", line.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}
