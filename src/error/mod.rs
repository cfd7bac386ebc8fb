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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonsError {
    #[error("{0} cannot be empty")]
    EmptyField(String),

    #[error("{0} cannot be an empty struct")]
    EmptyStruct(String),

    #[error("validation expects a struct")]
    NotAStruct,

    #[error("size cannot be empty")]
    EmptySize,

    #[error("invalid size format")]
    InvalidSizeFormat(String),

    #[error("invalid size unit")]
    InvalidSizeUnit(String),

    #[error("wanted file size cannot be negative")]
    NegativeWantedSize,

    #[error("tolerance size cannot be negative")]
    NegativeTolerance,

    #[error("count cannot be negative")]
    NegativeCount,

    #[error("singular and plural forms cannot be empty")]
    EmptyWordForms,

    #[error("string cannot be empty")]
    EmptyString,

    #[error("substring cannot be empty")]
    EmptySubstring,

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidNumber(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CommonsError>;
