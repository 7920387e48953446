// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rustyline::{Config, DefaultEditor, error::ReadlineError};
use tabula_form::Form;
use tabula_shell::{Shell, State};
use tracing::debug;

use crate::{
	command::{Command, HELP, table_by_number},
	config::AppConfig,
	error::CliError,
};

type Open = fn(&mut Shell) -> tabula_type::Result<Option<&mut Form>>;

pub struct Repl {
	shell: Shell,
	editor: DefaultEditor,
}

impl Repl {
	pub fn new(shell: Shell, config: &AppConfig) -> Result<Self, CliError> {
		let rl_config = Config::builder().max_history_size(config.history_size)?.auto_add_history(false).build();
		let editor = DefaultEditor::with_config(rl_config)?;
		Ok(Self {
			shell,
			editor,
		})
	}

	pub fn run(&mut self) -> Result<(), CliError> {
		println!("tabula {}, type 'help' for commands", self.shell.store().path());
		self.print_tables();

		loop {
			let prompt = match self.shell.selected_table() {
				Some(table) => format!("{table}> "),
				None => "> ".to_string(),
			};

			let line = match self.editor.readline(&prompt) {
				Ok(line) => line,
				Err(ReadlineError::Interrupted) => continue,
				Err(ReadlineError::Eof) => break,
				Err(err) => return Err(err.into()),
			};
			let line = line.trim();
			if line.is_empty() {
				continue;
			}
			self.editor.add_history_entry(line)?;

			match line.parse::<Command>() {
				Ok(Command::Quit) => break,
				Ok(command) => self.dispatch(command)?,
				Err(err) => eprintln!("{err}"),
			}
		}

		Ok(())
	}

	fn dispatch(&mut self, command: Command) -> Result<(), CliError> {
		debug!(?command, "dispatch");
		match command {
			Command::Tables => self.print_tables(),
			Command::Use(table) => {
				let result = self.shell.select_table(&table);
				self.show(result);
			}
			Command::Pick(number) => self.pick(number),
			Command::Show => {
				let result = self.shell.refresh();
				self.show(result);
			}
			Command::Add => self.edit(Shell::open_create)?,
			Command::Update => self.edit(Shell::open_update)?,
			Command::Delete => self.edit(Shell::open_delete)?,
			Command::Help => print!("{HELP}"),
			Command::Quit => {}
		}
		Ok(())
	}

	fn pick(&mut self, number: usize) {
		let tables = match self.shell.tables() {
			Ok(tables) => tables,
			Err(err) => {
				eprintln!("{err}");
				return;
			}
		};

		match table_by_number(&tables, number) {
			Some(table) => {
				let result = self.shell.select_table(table);
				self.show(result);
			}
			None => eprintln!("no table number {number}, see 'tables'"),
		}
	}

	/// Opens a form, prompts for its fields and submits it until the store
	/// accepts it or the user closes the form.
	fn edit(&mut self, open: Open) -> Result<(), CliError> {
		match open(&mut self.shell) {
			Ok(Some(_)) => {}
			Ok(None) => {
				eprintln!("no table selected, see 'tables'");
				return Ok(());
			}
			Err(err) => {
				eprintln!("{err}");
				return Ok(());
			}
		}

		loop {
			if !self.prompt_form()? {
				self.shell.cancel();
				println!("closed without changes");
				return Ok(());
			}

			let result = self.shell.submit();
			if self.shell.state() != State::FormOpen {
				self.show(result);
				return Ok(());
			}
			if let Err(err) = result {
				eprintln!("{err}");
			}
		}
	}

	/// Prompts every field of the open form, starting from its current
	/// input. Returns false when the user closes the form.
	fn prompt_form(&mut self) -> Result<bool, CliError> {
		let table = self.shell.selected_table().unwrap_or_default().to_string();
		let Some(form) = self.shell.form_mut() else {
			return Ok(false);
		};
		println!("{} ({table})", form.title());

		for id in form.field_ids() {
			let Some(field) = form.field(id) else {
				continue;
			};
			let prompt = format!("  {}: ", field.label);

			let input = match self.editor.readline_with_initial(&prompt, (field.input.as_str(), "")) {
				Ok(input) => input,
				Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(false),
				Err(err) => return Err(err.into()),
			};
			form.set(id, input);
		}

		Ok(true)
	}

	fn show(&self, result: tabula_type::Result<()>) {
		if let Err(err) = result {
			eprintln!("{err}");
		}

		if self.shell.selected_table().is_none() {
			eprintln!("no table selected, see 'tables'");
		} else if !self.shell.grid().is_empty() {
			print!("{}", self.shell.grid());
		}
	}

	fn print_tables(&self) {
		match self.shell.tables() {
			Ok(tables) if tables.is_empty() => println!("no tables"),
			Ok(tables) => {
				for (idx, table) in tables.iter().enumerate() {
					println!("{:>3}  {table}", idx + 1);
				}
			}
			Err(err) => eprintln!("{err}"),
		}
	}
}
