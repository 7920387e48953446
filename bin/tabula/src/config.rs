// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{path::PathBuf, time::Duration};

use tabula_store::SqliteConfig;

/// Database file opened at startup, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "goods.db";

pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// How long a statement waits on a lock held by another process.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Startup settings. Fixed at build time; the program reads neither
/// arguments nor environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
	pub db_path: PathBuf,
	pub log_directive: String,
	pub history_size: usize,
	pub busy_timeout: Duration,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			db_path: PathBuf::from(DEFAULT_DB_PATH),
			log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
			history_size: DEFAULT_HISTORY_SIZE,
			busy_timeout: DEFAULT_BUSY_TIMEOUT,
		}
	}
}

impl AppConfig {
	pub fn sqlite(&self) -> SqliteConfig {
		SqliteConfig::new(&self.db_path).busy_timeout(self.busy_timeout)
	}
}
