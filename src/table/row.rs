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

use crate::storage::formatting::format_size;
use crate::table::introspect::find_field_by_key;
use crate::table::record::Record;
use crate::table::value::FieldValue;
use crate::text::eq_fold;
use std::collections::HashMap;

/// Precomputed summary values keyed by column header.
pub type Footer = HashMap<String, FieldValue>;

const SIZE_FIELD: &str = "size";

/// Builds one table row, positionally aligned with `keys`.
///
/// Missing fields become an empty string. A `size` field holding an integer
/// that fits in `i64` is replaced by its human-readable form; every other
/// value is passed through unchanged.
pub fn materialize_row<R, K>(record: &R, keys: &[K]) -> Vec<FieldValue>
where
    R: Record + ?Sized,
    K: AsRef<str>,
{
    let fields = record.fields();

    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            match find_field_by_key(&fields, key) {
                Some(field) => {
                    if eq_fold(key, SIZE_FIELD) {
                        if let Some(bytes) = field.value.as_i64() {
                            return FieldValue::Str(format_size(bytes));
                        }
                    }
                    field.value.clone()
                }
                None => {
                    log::trace!("Field '{key}' not found, using placeholder");
                    FieldValue::empty()
                }
            }
        })
        .collect()
}

/// Builds the footer row. Unlike data rows, headers are matched exactly.
pub fn footer_row<H: AsRef<str>>(headers: &[H], footer: &Footer) -> Vec<FieldValue> {
    headers
        .iter()
        .map(|header| {
            footer
                .get(header.as_ref())
                .cloned()
                .unwrap_or_else(FieldValue::empty)
        })
        .collect()
}
