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

//! Tabulation of arbitrary records.
//!
//! Records describe their fields through the [`Record`] trait. From there
//! this module derives table headers, materializes rows, sorts collections
//! by a named field and renders everything with `comfy-table`.
//!
//! None of these operations fail: malformed input degrades to an empty
//! result, a placeholder value or a no-op, and the reason is logged at
//! debug level.

mod dynamic;
mod introspect;
mod record;
mod render;
mod row;
mod sort;
mod value;

pub use introspect::{describe_fields, find_field, find_field_by_key};
pub use record::Record;
pub use render::{
    EMPTY_TABLE_MESSAGE, RenderOptions, TablePreset, build_table, build_table_with, render,
    render_to, render_value_to, render_with,
};
pub use row::{Footer, footer_row, materialize_row};
pub use sort::{sort_records, sort_value};
pub use value::{Field, FieldValue, ToFieldValue};
