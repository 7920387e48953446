// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use rusqlite::types::ValueRef;

/// Field values entered by the user, positionally aligned to a table's columns.
pub type RecordValues = Vec<String>;

/// One fetched record, cells in catalog column order.
pub type Row = Vec<Value>;

/// A cell as returned by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Null,
	Integer(i64),
	Real(f64),
	Text(String),
	Blob(Vec<u8>),
}

impl Value {
	pub fn as_string(&self) -> String {
		self.to_string()
	}
}

impl From<ValueRef<'_>> for Value {
	fn from(value: ValueRef<'_>) -> Self {
		match value {
			ValueRef::Null => Value::Null,
			ValueRef::Integer(i) => Value::Integer(i),
			ValueRef::Real(f) => Value::Real(f),
			ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
			ValueRef::Blob(b) => Value::Blob(b.to_vec()),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Integer(i) => write!(f, "{}", i),
			Value::Real(r) => {
				// keep a trailing ".0" so reals stay distinguishable from integers
				if r.fract() == 0.0 && r.is_finite() {
					write!(f, "{:.1}", r)
				} else {
					write!(f, "{}", r)
				}
			}
			Value::Text(t) => f.write_str(t),
			Value::Blob(b) => {
				f.write_str("0x")?;
				for byte in b {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
		}
	}
}
