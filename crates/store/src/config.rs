// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	path::{Path, PathBuf},
	time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

impl fmt::Display for DbPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DbPath::File(path) => write!(f, "{}", path.display()),
			DbPath::Memory => f.write_str(":memory:"),
		}
	}
}

/// How the single connection is opened and tuned. A missing file is
/// created.
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteConfig {
	pub path: DbPath,
	pub foreign_keys: bool,
	pub busy_timeout: Duration,
}

impl SqliteConfig {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: DbPath::File(path.as_ref().to_path_buf()),
			foreign_keys: true,
			busy_timeout: Duration::from_secs(5),
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			..Self::new(":memory:")
		}
	}

	pub fn busy_timeout(mut self, timeout: Duration) -> Self {
		self.busy_timeout = timeout;
		self
	}
}
