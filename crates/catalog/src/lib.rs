// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]

//! Schema introspection over the SQLite catalog.
//!
//! Nothing here is cached: every call re-reads `sqlite_master` and
//! `pragma_table_info`, so a [`TableSchema`] is only valid for the operation
//! that fetched it.

pub mod column;
pub mod identifier;
mod primary_key;
pub mod table;

pub use column::{ColumnDescriptor, ColumnIndex};
pub use identifier::quote;
pub use table::TableSchema;
pub use tabula_type::Result;

pub struct Catalog {}
