// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod command;
mod config;
mod error;
mod repl;

use std::process::ExitCode;

use tabula_shell::Shell;
use tabula_store::RecordStore;
use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, error::CliError, repl::Repl};

fn init_logging(config: &AppConfig) {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(&config.log_directive))
		.with_writer(std::io::stderr)
		.init();
}

fn run(config: &AppConfig) -> Result<(), CliError> {
	let store = RecordStore::open(config.sqlite())?;
	let mut repl = Repl::new(Shell::new(store), config)?;
	repl.run()
}

fn main() -> ExitCode {
	let config = AppConfig::default();
	init_logging(&config);

	match run(&config) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{err}");
			ExitCode::FAILURE
		}
	}
}
