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

use crate::table::record::Record;
use crate::table::value::{Field, FieldValue};
use crate::text::eq_fold;
use log::trace;

/// Derives the column headers and lookup keys of a record.
///
/// Fields are visited in declaration order. An embedded member contributes
/// its own headers and keys in its place; the names are not prefixed, so a
/// name shared by the parent and the embed shows up twice. A record without
/// fields (such as a JSON scalar) yields two empty lists.
pub fn describe_fields<R: Record + ?Sized>(sample: &R) -> (Vec<String>, Vec<String>) {
    let mut headers = Vec::new();
    let mut keys = Vec::new();
    describe_into(&sample.fields(), &mut headers, &mut keys);
    (headers, keys)
}

fn describe_into(fields: &[Field], headers: &mut Vec<String>, keys: &mut Vec<String>) {
    for field in fields {
        match &field.value {
            FieldValue::Embedded(inner) => describe_into(inner, headers, keys),
            _ => {
                headers.push(field.label.clone());
                keys.push(field.key.clone());
            }
        }
    }
}

/// Finds a field by case-insensitive name on the flattened view of `fields`.
///
/// Keys are tried first and labels only when no key matches. Direct fields
/// are preferred over embedded ones: each nesting level is searched
/// completely before descending into the embeds found on it. Two matches on
/// the same level are ambiguous and count as not found.
pub fn find_field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    match search(fields, |f| eq_fold(&f.key, name)) {
        Lookup::Found(field) => Some(field),
        Lookup::Ambiguous => None,
        Lookup::Missing => search(fields, |f| f.matches(name)).found(),
    }
}

/// Like [`find_field`] but matches keys only.
pub fn find_field_by_key<'a>(fields: &'a [Field], key: &str) -> Option<&'a Field> {
    search(fields, |f| eq_fold(&f.key, key)).found()
}

enum Lookup<'a> {
    Found(&'a Field),
    Ambiguous,
    Missing,
}

impl<'a> Lookup<'a> {
    fn found(self) -> Option<&'a Field> {
        match self {
            Lookup::Found(field) => Some(field),
            Lookup::Ambiguous | Lookup::Missing => None,
        }
    }
}

fn search<'a>(fields: &'a [Field], is_match: impl Fn(&Field) -> bool) -> Lookup<'a> {
    let mut level: Vec<&'a [Field]> = vec![fields];

    while !level.is_empty() {
        let mut hits = level.iter().copied().flatten().filter(|f| is_match(f));
        match (hits.next(), hits.next()) {
            (Some(found), None) => return Lookup::Found(found),
            (Some(_), Some(_)) => {
                trace!("Field lookup is ambiguous at one nesting level");
                return Lookup::Ambiguous;
            }
            _ => {}
        }

        level = level
            .iter()
            .copied()
            .flatten()
            .filter_map(|field| match &field.value {
                FieldValue::Embedded(inner) => Some(inner.as_slice()),
                _ => None,
            })
            .collect();
    }

    Lookup::Missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Inner {
        a: String,
        b: i32,
    }

    struct Outer {
        inner: Inner,
        c: f64,
    }

    struct Shadowing {
        inner: Inner,
        b: &'static str,
    }

    crate::record!(Inner { a => "A", b => "B" });
    crate::record!(Outer { #[flatten] inner, c => "C" });
    crate::record!(Shadowing { #[flatten] inner, b => "B" });

    fn inner() -> Inner {
        Inner {
            a: "alpha".to_string(),
            b: 2,
        }
    }

    #[test]
    fn test_embedded_fields_are_spliced_in_place() {
        let outer = Outer { inner: inner(), c: 3.0 };
        let (headers, keys) = describe_fields(&outer);

        assert_eq!(headers, vec!["A", "B", "C"]);
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_colliding_names_are_not_disambiguated() {
        let shadowing = Shadowing {
            inner: inner(),
            b: "outer",
        };
        let (headers, _) = describe_fields(&shadowing);

        assert_eq!(headers, vec!["A", "B", "B"]);
    }

    #[test]
    fn test_non_structured_sample_yields_nothing() {
        let (headers, keys) = describe_fields(&json!("not a record"));
        assert!(headers.is_empty());
        assert!(keys.is_empty());

        let (headers, _) = describe_fields(&json!(42));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_find_field_is_case_insensitive() {
        let fields = Outer { inner: inner(), c: 3.0 }.fields();

        assert_eq!(find_field(&fields, "C").unwrap().value, FieldValue::Float(3.0));
        assert_eq!(
            find_field(&fields, "A").unwrap().value,
            FieldValue::Str("alpha".to_string())
        );
        assert!(find_field(&fields, "d").is_none());
    }

    #[test]
    fn test_find_field_prefers_shallow_fields() {
        let fields = Shadowing {
            inner: inner(),
            b: "outer",
        }
        .fields();

        assert_eq!(
            find_field(&fields, "b").unwrap().value,
            FieldValue::Str("outer".to_string())
        );
    }

    struct Clash {
        inner: Inner,
        c: f64,
    }

    struct Pair {
        left: Inner,
        right: Inner,
        c: f64,
    }

    crate::record!(Clash { #[flatten] inner, c => "b" });
    crate::record!(Pair { #[flatten] left, #[flatten] right, c => "C" });

    #[test]
    fn test_keys_win_over_shallower_labels() {
        let fields = Clash { inner: inner(), c: 9.0 }.fields();

        assert_eq!(find_field(&fields, "b").unwrap().value, FieldValue::Int(2));
        assert_eq!(
            find_field_by_key(&fields, "b").unwrap().value,
            FieldValue::Int(2)
        );
        assert_eq!(find_field(&fields, "c").unwrap().value, FieldValue::Float(9.0));
    }

    #[test]
    fn test_labels_are_a_fallback() {
        let labeled = vec![Field::labeled("file_size", "File Size", 10i64)];

        assert!(find_field(&labeled, "file size").is_some());
        assert!(find_field(&labeled, "FILE_SIZE").is_some());
        assert!(find_field_by_key(&labeled, "file size").is_none());
    }

    #[test]
    fn test_same_depth_matches_are_ambiguous() {
        let fields = Pair {
            left: inner(),
            right: inner(),
            c: 1.0,
        }
        .fields();

        assert!(find_field(&fields, "a").is_none());
        assert!(find_field_by_key(&fields, "b").is_none());
        assert_eq!(find_field(&fields, "c").unwrap().value, FieldValue::Float(1.0));
    }

    #[test]
    fn test_same_depth_json_keys_are_ambiguous() {
        let value = json!({"size": 1, "Size": 2});
        assert!(find_field(&value.fields(), "size").is_none());
    }

    #[test]
    fn test_find_field_matches_the_embed_itself() {
        let fields = Outer { inner: inner(), c: 3.0 }.fields();

        let found = find_field(&fields, "INNER").unwrap();
        assert!(matches!(found.value, FieldValue::Embedded(_)));
    }
}
