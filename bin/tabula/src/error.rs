// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rustyline::error::ReadlineError;

/// Failures that end the program. Errors of single operations are printed
/// by the loop and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error(transparent)]
	Store(#[from] tabula_type::Error),

	#[error("terminal error: {0}")]
	Readline(#[from] ReadlineError),
}
