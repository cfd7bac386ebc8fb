//! Required-field checks for records.

use crate::error::{CommonsError, Result};
use crate::table::{Field, FieldValue, Record};
use log::trace;
use serde_json::Value;

/// Checks that no top-level string of `record` is empty and that no nested
/// record is entirely zero-valued.
///
/// Fields are checked in declaration order and the first failure is
/// returned, naming the field by its label.
pub fn validate_record<R: Record + ?Sized>(record: &R) -> Result<()> {
    validate_fields(&record.fields())
}

/// Like [`validate_record`] for a JSON document, which must be an object.
pub fn validate_value(value: &Value) -> Result<()> {
    if !value.is_object() {
        return Err(CommonsError::NotAStruct);
    }
    validate_record(value)
}

fn validate_fields(fields: &[Field]) -> Result<()> {
    for field in fields {
        trace!("Validating field {}", field.key);
        match &field.value {
            FieldValue::Str(s) if s.is_empty() => {
                return Err(CommonsError::EmptyField(field.label.clone()));
            }
            FieldValue::Record(_) | FieldValue::Embedded(_) if field.value.is_zero() => {
                return Err(CommonsError::EmptyStruct(field.label.clone()));
            }
            _ => {}
        }
    }
    Ok(())
}
