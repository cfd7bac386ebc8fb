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

use crate::config::CommonsConfig;
use crate::error::{CommonsError, Result};
use crate::table::{FieldValue, Footer, RenderOptions, TablePreset, render_value_to, sort_value};
use crate::validation::validate_value;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

pub struct TableOptions<'a> {
    pub sort: Option<&'a str>,
    pub descending: bool,
    pub totals: &'a [String],
    pub preset: Option<TablePreset>,
    pub validate: bool,
}

pub struct TableCommand<'a> {
    config: &'a CommonsConfig,
}

impl<'a> TableCommand<'a> {
    pub fn new(config: &'a CommonsConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, file: &Path, options: &TableOptions<'_>) -> Result<()> {
        let contents = fs::read_to_string(file)?;
        let mut document: Value = serde_json::from_str(&contents)?;
        debug!("Loaded table document from {file:?}");

        if options.validate {
            validate_rows(&document)?;
        }

        if let Some(field) = options.sort {
            sort_value(&mut document, field, options.descending);
        }

        let footer = parse_totals(options.totals)?;

        let mut render_options: RenderOptions = self.config.render_options();
        if let Some(preset) = options.preset {
            render_options.preset = preset;
        }

        let mut stdout = io::stdout().lock();
        render_value_to(&mut stdout, &document, &footer, &render_options)?;
        Ok(())
    }
}

fn validate_rows(document: &Value) -> Result<()> {
    match document {
        Value::Array(items) => items.iter().try_for_each(validate_value),
        other => validate_value(other),
    }
}

/// Parses `LABEL=VALUE` pairs into a footer.
///
/// Values that read as integers or floats become numbers, anything else
/// stays text.
pub fn parse_totals(totals: &[String]) -> Result<Footer> {
    let mut footer = Footer::new();
    for entry in totals {
        let Some((label, value)) = entry.split_once('=') else {
            return Err(CommonsError::ValidationError(format!(
                "Footer entry '{entry}' must be LABEL=VALUE"
            )));
        };
        let label = label.trim();
        if label.is_empty() {
            return Err(CommonsError::EmptyField("Footer label".to_string()));
        }
        footer.insert(label.to_string(), parse_total_value(value.trim()));
    }
    Ok(footer)
}

fn parse_total_value(value: &str) -> FieldValue {
    if let Ok(v) = value.parse::<i64>() {
        FieldValue::Int(v)
    } else if let Ok(v) = value.parse::<f64>() {
        FieldValue::Float(v)
    } else {
        FieldValue::Str(value.to_string())
    }
}
