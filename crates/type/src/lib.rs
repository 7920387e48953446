// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{Error, SchemaError};
pub use value::{RecordValues, Row, Value};

pub type Result<T> = std::result::Result<T, Error>;
