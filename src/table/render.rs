// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::table::introspect::describe_fields;
use crate::table::record::Record;
use crate::table::row::{Footer, footer_row, materialize_row};
use crate::table::value::FieldValue;
use crate::text::eq_fold;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Write};

/// Printed instead of a table when there is nothing to tabulate.
pub const EMPTY_TABLE_MESSAGE: &str = "Expected a non-empty collection of records";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TablePreset {
    #[default]
    Utf8Full,
    Utf8BordersOnly,
    Ascii,
    Nothing,
}

impl TablePreset {
    fn preset(&self) -> &'static str {
        match self {
            TablePreset::Utf8Full => comfy_table::presets::UTF8_FULL,
            TablePreset::Utf8BordersOnly => comfy_table::presets::UTF8_BORDERS_ONLY,
            TablePreset::Ascii => comfy_table::presets::ASCII_FULL,
            TablePreset::Nothing => comfy_table::presets::NOTHING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub preset: TablePreset,
    /// Right-align numeric and size columns
    pub align_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preset: TablePreset::default(),
            align_numbers: true,
        }
    }
}

pub fn build_table<R: Record>(records: &[R], footer: &Footer) -> Option<Table> {
    build_table_with(records, footer, &RenderOptions::default())
}

/// Builds the table for `records`, using the first record as the schema.
///
/// Returns `None` when there are no records or the first record has no
/// fields.
pub fn build_table_with<R: Record>(
    records: &[R],
    footer: &Footer,
    options: &RenderOptions,
) -> Option<Table> {
    let Some(first) = records.first() else {
        debug!("Nothing to render: empty collection");
        return None;
    };

    let (headers, keys) = describe_fields(first);
    if headers.is_empty() {
        debug!("Nothing to render: first record has no fields");
        return None;
    }

    let mut table = Table::new();
    table.load_preset(options.preset.preset());
    table.set_header(headers.iter().map(Cell::new).collect::<Vec<_>>());

    let mut numeric = vec![false; keys.len()];
    let mut text = vec![false; keys.len()];
    for record in records {
        let row = materialize_row(record, &keys);
        for (column, value) in row.iter().enumerate() {
            if value.is_numeric() {
                numeric[column] = true;
            } else if !is_placeholder(value) {
                text[column] = true;
            }
        }
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }

    if !footer.is_empty() {
        let cells: Vec<Cell> = footer_row(&headers, footer)
            .iter()
            .map(|value| Cell::new(value).add_attribute(Attribute::Bold))
            .collect();
        table.add_row(cells);
    }

    if options.align_numbers {
        for (column, key) in keys.iter().enumerate() {
            if eq_fold(key, "size") || (numeric[column] && !text[column]) {
                if let Some(col) = table.column_mut(column) {
                    col.set_cell_alignment(CellAlignment::Right);
                }
            }
        }
    }

    Some(table)
}

fn is_placeholder(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Str(s) | FieldValue::Other(s) if s.is_empty())
}

/// Writes the table, or [`EMPTY_TABLE_MESSAGE`] when there is nothing to show.
pub fn render_to<W: Write, R: Record>(
    writer: &mut W,
    records: &[R],
    footer: &Footer,
    options: &RenderOptions,
) -> io::Result<()> {
    match build_table_with(records, footer, options) {
        Some(table) => writeln!(writer, "{table}"),
        None => writeln!(writer, "{EMPTY_TABLE_MESSAGE}"),
    }
}

/// Renders `records` to standard output.
pub fn render<R: Record>(records: &[R], footer: &Footer) {
    render_with(records, footer, &RenderOptions::default());
}

pub fn render_with<R: Record>(records: &[R], footer: &Footer, options: &RenderOptions) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = render_to(&mut stdout, records, footer, options) {
        warn!("Failed to write table: {e}");
    }
}

/// Like [`render_to`] for a JSON document, which must be an array of objects.
pub fn render_value_to<W: Write>(
    writer: &mut W,
    value: &Value,
    footer: &Footer,
    options: &RenderOptions,
) -> io::Result<()> {
    match value {
        Value::Array(items) => render_to(writer, items, footer, options),
        _ => {
            debug!("Nothing to render: expected a JSON array");
            writeln!(writer, "{EMPTY_TABLE_MESSAGE}")
        }
    }
}
