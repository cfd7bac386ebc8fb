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

//! JSON values as records.
//!
//! Objects list their members in document order (serde_json is built with
//! `preserve_order`). Every other JSON value is a record without fields.

use crate::table::record::Record;
use crate::table::value::{Field, FieldValue, ToFieldValue};
use serde_json::{Number, Value};

impl Record for Value {
    fn fields(&self) -> Vec<Field> {
        match self {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| Field::new(key.as_str(), value.to_field_value()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Value::Null => FieldValue::Other(String::new()),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => number_value(n),
            Value::String(s) => FieldValue::Str(s.clone()),
            Value::Array(_) => FieldValue::Other(self.to_string()),
            Value::Object(_) => FieldValue::Record(self.fields()),
        }
    }
}

fn number_value(n: &Number) -> FieldValue {
    if let Some(v) = n.as_i64() {
        FieldValue::Int(v)
    } else if let Some(v) = n.as_u64() {
        FieldValue::Uint(v)
    } else {
        FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
