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

use crate::table::value::Field;

/// A value whose named fields can be listed in declaration order.
///
/// Most implementations come from the [`record!`](crate::record) macro.
/// Embedded members are reported as a single [`FieldValue::Embedded`]
/// field; the table functions flatten them.
///
/// [`FieldValue::Embedded`]: crate::table::FieldValue::Embedded
pub trait Record {
    fn fields(&self) -> Vec<Field>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

/// Implements [`Record`] for a struct by listing its fields in order.
///
/// Each entry is a field name, optionally followed by `=> "Label"` to set
/// the header text. `#[flatten]` splices the member's own fields into the
/// parent (the member must implement `Record`), `#[nested]` keeps the member
/// as one column holding a nested record.
///
/// ```
/// use commons::record;
///
/// struct FileInfo {
///     name: String,
///     size: i64,
/// }
///
/// struct Entry {
///     info: FileInfo,
///     owner: String,
/// }
///
/// record!(FileInfo { name => "Name", size => "Size" });
/// record!(Entry { #[flatten] info, owner => "Owner" });
///
/// let entry = Entry {
///     info: FileInfo { name: "a.txt".into(), size: 1024 },
///     owner: "root".into(),
/// };
/// let (headers, _) = commons::table::describe_fields(&entry);
/// assert_eq!(headers, vec!["Name", "Size", "Owner"]);
/// ```
#[macro_export]
macro_rules! record {
    (@label $field:ident) => {
        stringify!($field)
    };
    (@label $field:ident, $label:literal) => {
        $label
    };
    (@value $value:expr,) => {
        $crate::table::ToFieldValue::to_field_value($value)
    };
    (@value $value:expr, nested) => {
        $crate::table::FieldValue::Record($crate::table::Record::fields($value))
    };
    (@value $value:expr, flatten) => {
        $crate::table::FieldValue::Embedded($crate::table::Record::fields($value))
    };
    ($ty:ty { $( $(#[$attr:ident])? $field:ident $(=> $label:literal)? ),* $(,)? }) => {
        impl $crate::table::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::table::Field> {
                ::std::vec![
                    $(
                        $crate::table::Field::labeled(
                            stringify!($field),
                            $crate::record!(@label $field $(, $label)?),
                            $crate::record!(@value &self.$field, $($attr)?),
                        ),
                    )*
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::table::{Field, FieldValue, Record};

    struct Colors {
        background: String,
        foreground: String,
    }

    struct Styles {
        color: Colors,
    }

    struct Person {
        name: String,
        age: u32,
    }

    struct Employee {
        person: Person,
        style: Styles,
        title: &'static str,
    }

    crate::record!(Colors { background, foreground });
    crate::record!(Styles { #[nested] color => "Color" });
    crate::record!(Person { name => "Name", age => "Age" });
    crate::record!(Employee {
        #[flatten] person,
        #[nested] style => "Style",
        title => "Title",
    });

    fn sample() -> Employee {
        Employee {
            person: Person {
                name: "Ada".to_string(),
                age: 36,
            },
            style: Styles {
                color: Colors {
                    background: "black".to_string(),
                    foreground: "green".to_string(),
                },
            },
            title: "Engineer",
        }
    }

    #[test]
    fn test_macro_uses_field_name_when_label_missing() {
        let colors = Colors {
            background: "red".to_string(),
            foreground: String::new(),
        };
        let fields = colors.fields();
        assert_eq!(fields[0], Field::new("background", "red"));
        assert_eq!(fields[1].label, "foreground");
    }

    #[test]
    fn test_macro_field_order_and_labels() {
        let fields = sample().fields();
        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();

        assert_eq!(labels, vec!["person", "Style", "Title"]);
        assert_eq!(keys, vec!["person", "style", "title"]);
    }

    #[test]
    fn test_macro_flatten_and_nested_values() {
        let fields = sample().fields();

        match &fields[0].value {
            FieldValue::Embedded(inner) => {
                assert_eq!(inner[0], Field::labeled("name", "Name", "Ada"));
                assert_eq!(inner[1].value, FieldValue::Uint(36));
            }
            other => panic!("expected embedded fields, got {other:?}"),
        }

        match &fields[1].value {
            FieldValue::Record(inner) => {
                assert!(matches!(inner[0].value, FieldValue::Record(_)));
            }
            other => panic!("expected nested record, got {other:?}"),
        }

        assert_eq!(fields[2].value, FieldValue::Str("Engineer".to_string()));
    }

    #[test]
    fn test_record_for_references_and_boxes() {
        let employee = sample();
        let by_ref: &Employee = &employee;
        let boxed: Box<dyn Record> = Box::new(sample());

        assert_eq!(by_ref.fields().len(), 3);
        assert_eq!(boxed.fields(), employee.fields());
    }
}
