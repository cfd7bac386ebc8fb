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

use crate::table::introspect::find_field;
use crate::table::record::Record;
use crate::table::value::FieldValue;
use log::debug;
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl SortKey {
    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Str(s) => Some(SortKey::Str(s.clone())),
            FieldValue::Int(v) => Some(SortKey::Int(*v)),
            FieldValue::Uint(v) => Some(SortKey::Uint(*v)),
            FieldValue::Float(v) => Some(SortKey::Float(*v)),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        !matches!(self, SortKey::Str(_))
    }

    fn as_f64(&self) -> f64 {
        match self {
            SortKey::Int(v) => *v as f64,
            SortKey::Uint(v) => *v as f64,
            SortKey::Float(v) => *v,
            SortKey::Str(_) => f64::NAN,
        }
    }
}

/// Sorts `records` in place by the field named `by_field`.
///
/// The field name is matched case-insensitively. Strings compare byte-wise,
/// integers and floats numerically. The sort is stable in both directions:
/// `descending` reverses the comparison, records with equal keys keep their
/// relative order. NaN sorts after every number regardless of direction.
///
/// The slice is left untouched when any record lacks the field, when the
/// field holds an unsupported kind (time, bool, nested record, ...) or when
/// records disagree on the kind. Integer and float keys mixed across records
/// are compared as floats.
pub fn sort_records<R: Record>(records: &mut [R], by_field: &str, descending: bool) {
    if records.len() < 2 {
        return;
    }

    let mut keys = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let fields = record.fields();
        let Some(field) = find_field(&fields, by_field) else {
            debug!("Sort skipped: record {index} has no field '{by_field}'");
            return;
        };
        let Some(key) = SortKey::from_value(&field.value) else {
            debug!(
                "Sort skipped: field '{by_field}' has unsupported kind {}",
                field.value.kind()
            );
            return;
        };
        keys.push(key);
    }

    let Some(keys) = unify_kinds(keys) else {
        debug!("Sort skipped: field '{by_field}' mixes strings and numbers");
        return;
    };

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| compare_keys(&keys[a], &keys[b], descending));
    apply_order(records, &order);
}

/// Sorts a JSON array of objects in place. Any other JSON value is left as is.
pub fn sort_value(value: &mut Value, by_field: &str, descending: bool) {
    match value {
        Value::Array(items) => sort_records(items.as_mut_slice(), by_field, descending),
        _ => debug!("Sort skipped: expected a JSON array"),
    }
}

fn unify_kinds(keys: Vec<SortKey>) -> Option<Vec<SortKey>> {
    let first = keys.first()?;
    let same_kind = keys
        .iter()
        .all(|k| std::mem::discriminant(k) == std::mem::discriminant(first));
    if same_kind {
        return Some(keys);
    }

    if keys.iter().all(SortKey::is_numeric) {
        return Some(keys.iter().map(|k| SortKey::Float(k.as_f64())).collect());
    }

    None
}

fn compare_keys(a: &SortKey, b: &SortKey, descending: bool) -> Ordering {
    let ordering = match (a, b) {
        (SortKey::Str(x), SortKey::Str(y)) => x.cmp(y),
        (SortKey::Int(x), SortKey::Int(y)) => x.cmp(y),
        (SortKey::Uint(x), SortKey::Uint(y)) => x.cmp(y),
        (SortKey::Float(x), SortKey::Float(y)) => match (x.is_nan(), y.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        },
        _ => Ordering::Equal,
    };

    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Rearranges `items` so that position `i` holds the element previously at
/// `order[i]`.
fn apply_order<T>(items: &mut [T], order: &[usize]) {
    for i in 0..order.len() {
        let mut source = order[i];
        while source < i {
            source = order[source];
        }
        items.swap(i, source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: i32,
        income: f64,
        height: u64,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Event {
        name: String,
        timestamp: chrono::DateTime<Utc>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Base {
        name: String,
        age: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct PersonWithEmbedded {
        base: Base,
        income: f64,
    }

    crate::record!(Person {
        name => "Name",
        age => "Age",
        income => "Income",
        height => "Height",
    });
    crate::record!(Event { name => "Name", timestamp => "Timestamp" });
    crate::record!(Base { name => "Name", age => "Age" });
    crate::record!(PersonWithEmbedded { #[flatten] base, income => "Income" });

    fn person(name: &str, age: i32, income: f64, height: u64) -> Person {
        Person {
            name: name.to_string(),
            age,
            income,
            height,
        }
    }

    fn names<R>(records: &[R], name: impl Fn(&R) -> &str) -> Vec<&str> {
        records.iter().map(name).collect()
    }

    fn john_and_alice() -> Vec<Person> {
        vec![
            person("John", 30, 50000.0, 180),
            person("Alice", 25, 60000.0, 165),
        ]
    }

    #[test]
    fn test_sort_by_age_ascending() {
        let mut people = john_and_alice();
        sort_records(&mut people, "Age", false);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["Alice", "John"]);
    }

    #[test]
    fn test_sort_field_name_ignores_case() {
        let mut people = john_and_alice();
        sort_records(&mut people, "aGe", false);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["Alice", "John"]);
    }

    #[test]
    fn test_sort_by_missing_field_keeps_order() {
        let mut people = john_and_alice();
        sort_records(&mut people, "NonExistent", false);
        assert_eq!(people, john_and_alice());

        sort_records(&mut people, "NonExistent", true);
        assert_eq!(people, john_and_alice());
    }

    #[test]
    fn test_sort_by_string() {
        let mut people = vec![
            person("Charlie", 1, 0.0, 0),
            person("alice", 2, 0.0, 0),
            person("Bob", 3, 0.0, 0),
        ];
        sort_records(&mut people, "name", false);
        // Byte-wise: uppercase letters sort before lowercase ones.
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["Bob", "Charlie", "alice"]);
    }

    #[test]
    fn test_sort_by_float_descending() {
        let mut people = john_and_alice();
        sort_records(&mut people, "Income", true);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["Alice", "John"]);
    }

    #[test]
    fn test_sort_by_unsigned() {
        let mut people = john_and_alice();
        sort_records(&mut people, "height", false);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["Alice", "John"]);

        sort_records(&mut people, "height", true);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["John", "Alice"]);
    }

    #[test]
    fn test_numeric_sort_is_monotonic() {
        let ages = [42, 7, 19, 7, -3, 100, 0, 19];
        let mut people: Vec<Person> = ages
            .iter()
            .enumerate()
            .map(|(i, age)| person(&format!("p{i}"), *age, *age as f64 * 1.5, i as u64))
            .collect();

        sort_records(&mut people, "Age", false);
        assert!(people.windows(2).all(|w| w[0].age <= w[1].age));

        sort_records(&mut people, "Income", true);
        assert!(people.windows(2).all(|w| w[0].income >= w[1].income));
    }

    #[test]
    fn test_ties_keep_relative_order_in_both_directions() {
        let original = vec![
            person("first", 30, 0.0, 0),
            person("youngest", 20, 0.0, 0),
            person("second", 30, 0.0, 0),
            person("third", 30, 0.0, 0),
        ];

        let mut ascending = original.clone();
        sort_records(&mut ascending, "Age", false);
        assert_eq!(
            names(&ascending, |p| p.name.as_str()),
            vec!["youngest", "first", "second", "third"]
        );

        let mut descending = original.clone();
        sort_records(&mut descending, "Age", true);
        assert_eq!(
            names(&descending, |p| p.name.as_str()),
            vec!["first", "second", "third", "youngest"]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut people = vec![
            person("c", 3, 0.0, 0),
            person("a", 1, 0.0, 0),
            person("b", 1, 0.0, 0),
        ];
        sort_records(&mut people, "Age", false);
        let once = people.clone();
        sort_records(&mut people, "Age", false);
        assert_eq!(people, once);
    }

    #[test]
    fn test_unsupported_kind_keeps_order() {
        let original = vec![
            Event {
                name: "later".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            },
            Event {
                name: "earlier".to_string(),
                timestamp: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            },
        ];
        let mut events = original.clone();

        sort_records(&mut events, "Timestamp", false);
        assert_eq!(events, original);

        sort_records(&mut events, "Timestamp", true);
        assert_eq!(events, original);
    }

    #[test]
    fn test_sort_by_embedded_field() {
        let mut people = vec![
            PersonWithEmbedded {
                base: Base {
                    name: "John".to_string(),
                    age: 30,
                },
                income: 1.0,
            },
            PersonWithEmbedded {
                base: Base {
                    name: "Alice".to_string(),
                    age: 25,
                },
                income: 2.0,
            },
        ];
        sort_records(&mut people, "age", false);
        assert_eq!(names(&people, |p| p.base.name.as_str()), vec!["Alice", "John"]);
    }

    #[test]
    fn test_nan_sorts_last_in_both_directions() {
        let mut people = vec![
            person("nan", 0, f64::NAN, 0),
            person("high", 0, 10.0, 0),
            person("low", 0, -1.0, 0),
        ];

        sort_records(&mut people, "Income", false);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["low", "high", "nan"]);

        sort_records(&mut people, "Income", true);
        assert_eq!(names(&people, |p| p.name.as_str()), vec!["high", "low", "nan"]);
    }

    #[test]
    fn test_sort_json_array() {
        let mut value = json!([
            {"Name": "John", "Age": 30},
            {"Name": "Alice", "Age": 25},
            {"Name": "Zed", "Age": 27.5}
        ]);
        sort_value(&mut value, "age", false);

        let sorted: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["Name"].as_str().unwrap())
            .collect();
        assert_eq!(sorted, vec!["Alice", "Zed", "John"]);
    }

    #[test]
    fn test_sort_json_mixed_kinds_keeps_order() {
        let original = json!([{"v": "b"}, {"v": 1}, {"v": "a"}]);
        let mut value = original.clone();
        sort_value(&mut value, "v", false);
        assert_eq!(value, original);
    }

    #[test]
    fn test_sort_non_array_json_is_noop() {
        let original = json!({"Name": "John"});
        let mut value = original.clone();
        sort_value(&mut value, "Name", false);
        assert_eq!(value, original);
    }

    #[test]
    fn test_apply_order() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        apply_order(&mut items, &[2, 0, 3, 1]);
        assert_eq!(items, vec!['c', 'a', 'd', 'b']);
    }
}
