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

use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single named value of a record.
///
/// `key` is what lookups match against, `label` is what a table header shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            value: value.into(),
        }
    }

    pub fn labeled(
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// Case-insensitive match against either the key or the label.
    pub fn matches(&self, name: &str) -> bool {
        crate::text::eq_fold(&self.key, name) || crate::text::eq_fold(&self.label, name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Time(DateTime<FixedOffset>),
    /// A named nested record, shown as a single column.
    Record(Vec<Field>),
    /// An anonymous embed whose fields are spliced into the parent.
    Embedded(Vec<Field>),
    Other(String),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Str(String::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Int(_) => "int",
            FieldValue::Uint(_) => "uint",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Time(_) => "time",
            FieldValue::Record(_) => "record",
            FieldValue::Embedded(_) => "embedded",
            FieldValue::Other(_) => "other",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldValue::Int(_) | FieldValue::Uint(_) | FieldValue::Float(_)
        )
    }

    /// The value as a signed 64-bit integer, when it fits without loss.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Whether the value equals the default of its kind. Nested records are
    /// zero when every one of their fields is.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) | FieldValue::Other(s) => s.is_empty(),
            FieldValue::Int(v) => *v == 0,
            FieldValue::Uint(v) => *v == 0,
            FieldValue::Float(v) => *v == 0.0,
            FieldValue::Bool(v) => !*v,
            FieldValue::Time(_) => false,
            FieldValue::Record(fields) | FieldValue::Embedded(fields) => {
                fields.iter().all(|f| f.value.is_zero())
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) | FieldValue::Other(s) => write!(f, "{s}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
            FieldValue::Record(fields) | FieldValue::Embedded(fields) => {
                let parts: Vec<String> = fields.iter().map(|f| f.value.to_string()).collect();
                write!(f, "{{{}}}", parts.join(" "))
            }
        }
    }
}

/// Conversion of a record member into a [`FieldValue`].
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.to_string())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.clone())
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.to_string())
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(impl ToFieldValue for $t {
            fn to_field_value(&self) -> FieldValue {
                FieldValue::Int(*self as i64)
            }
        })*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(impl ToFieldValue for $t {
            fn to_field_value(&self) -> FieldValue {
                FieldValue::Uint(*self as u64)
            }
        })*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(f64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl<Tz: TimeZone> ToFieldValue for DateTime<Tz> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Time(self.with_timezone(&self.offset().fix()))
    }
}

impl ToFieldValue for Path {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.display().to_string())
    }
}

impl ToFieldValue for PathBuf {
    fn to_field_value(&self) -> FieldValue {
        self.as_path().to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Other(String::new()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Uint(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}
