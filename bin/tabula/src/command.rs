// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

pub const HELP: &str = "\
commands:
  tables          list the tables of the database
  use <table>     select a table (or type its number)
  show            re-read the selected table
  add             add a record
  update          change a record, located by its primary key
  delete          delete a record, located by its primary key
  help            show this text
  quit            leave

Inside a form, Enter confirms a field and Ctrl-C or Ctrl-D closes the form
without writing anything.
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
	Tables,
	Use(String),
	/// Select by the 1-based position printed by `tables`.
	Pick(usize),
	Show,
	Add,
	Update,
	Delete,
	Help,
	Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
	#[error("unknown command '{0}', type 'help' for a list")]
	Unknown(String),

	#[error("usage: use <table>")]
	MissingTable,
}

impl FromStr for Command {
	type Err = CommandError;

	fn from_str(line: &str) -> Result<Self, Self::Err> {
		let line = line.trim();

		if let Ok(number) = line.parse::<usize>() {
			return Ok(Command::Pick(number));
		}

		let (word, rest) = match line.split_once(char::is_whitespace) {
			Some((word, rest)) => (word, rest.trim()),
			None => (line, ""),
		};

		match (word.to_ascii_lowercase().as_str(), rest) {
			("tables" | "ls", "") => Ok(Command::Tables),
			("use", "") => Err(CommandError::MissingTable),
			("use", table) => Ok(Command::Use(table.to_string())),
			("show", "") => Ok(Command::Show),
			("add", "") => Ok(Command::Add),
			("update", "") => Ok(Command::Update),
			("delete", "") => Ok(Command::Delete),
			("help" | "?", "") => Ok(Command::Help),
			("quit" | "exit", "") => Ok(Command::Quit),
			_ => Err(CommandError::Unknown(line.to_string())),
		}
	}
}

/// Resolves a 1-based table number.
pub fn table_by_number(tables: &[String], number: usize) -> Option<&str> {
	number.checked_sub(1).and_then(|idx| tables.get(idx)).map(String::as_str)
}
