// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Quotes an identifier for interpolation into SQL text.
///
/// Only names that came out of the catalog are passed here; values are always
/// bound as parameters.
pub fn quote(ident: &str) -> String {
	format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quotes every identifier and joins them with `,`.
pub fn quote_all<'a>(idents: impl IntoIterator<Item = &'a str>) -> String {
	idents.into_iter().map(quote).collect::<Vec<_>>().join(",")
}
