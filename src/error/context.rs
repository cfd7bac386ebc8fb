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

use crate::error::CommonsError;
use crate::models::{FileType, OperatorType, SIZE_UNITS};
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a CommonsError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a CommonsError) -> Self {
        let (suggestion, details) = match error {
            CommonsError::EmptySize => {
                let suggestion = Some(
                    "Provide a size such as '512 B', '1.5 KB' or '2GB'.".to_string(),
                );
                (suggestion, None)
            }
            CommonsError::InvalidSizeFormat(input) => {
                let suggestion = Some(
                    "Size format should be: '<number><unit>' (e.g., '10MB' or '1.5 GB')."
                        .to_string(),
                );
                let details = Some(format!("Could not split '{input}' into number and unit"));
                (suggestion, details)
            }
            CommonsError::InvalidSizeUnit(unit) => {
                let labels: Vec<&str> = SIZE_UNITS.iter().rev().map(|u| u.label).collect();
                let suggestion = Some(format!("Supported units: {}.", labels.join(", ")));
                let details = Some(format!("Unit '{unit}' is not recognized"));
                (suggestion, details)
            }
            CommonsError::InvalidNumber(e) => {
                let suggestion =
                    Some("The numeric part must be a decimal number (e.g., '1.5').".to_string());
                let details = Some(format!("Parse failure: {e}"));
                (suggestion, details)
            }
            CommonsError::NegativeWantedSize | CommonsError::NegativeTolerance => {
                let suggestion = Some("Sizes and tolerances must be zero or greater.".to_string());
                (suggestion, None)
            }
            CommonsError::UnknownFileType(input) => {
                let names: Vec<String> = FileType::all().iter().map(|t| t.to_string()).collect();
                let suggestion = Some(format!("Supported file types: {}.", names.join(", ")));
                let details = Some(format!("'{input}' does not name a file type"));
                (suggestion, details)
            }
            CommonsError::UnknownOperator(input) => {
                let aliases: Vec<String> = OperatorType::all()
                    .iter()
                    .map(|op| format!("{} ({})", op.short_alias(), op))
                    .collect();
                let suggestion = Some(format!("Supported operators:\n{}", aliases.join("\n")));
                let details = Some(format!("'{input}' does not name an operator"));
                (suggestion, details)
            }
            CommonsError::NotADirectory(path) => {
                let suggestion = Some("Pass the path of a directory, not a file.".to_string());
                let details = Some(format!("Path checked: {path}"));
                (suggestion, details)
            }
            CommonsError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check config.toml in $COMMONS_HOME or your platform config directory."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            CommonsError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                let suggestion = if cfg!(windows) {
                    Some("Run the terminal as Administrator or check file permissions.".to_string())
                } else {
                    Some("Check file permissions or run with sudo if appropriate.".to_string())
                };
                (suggestion, Some(e.to_string()))
            }
            CommonsError::Json(e) => {
                let suggestion = Some(
                    "Table input must be a JSON array of objects, e.g. [{\"Name\": \"a\"}]."
                        .to_string(),
                );
                let details = Some(format!("JSON error at line {}: {e}", e.line()));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
