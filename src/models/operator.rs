use crate::error::{CommonsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison applied between a file size and a wanted size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    EqualTo,
    GreaterThan,
    GreaterThanEqualTo,
    LessThan,
    LessThanEqualTo,
}

impl OperatorType {
    pub fn all() -> &'static [OperatorType] {
        &[
            OperatorType::EqualTo,
            OperatorType::GreaterThan,
            OperatorType::GreaterThanEqualTo,
            OperatorType::LessThan,
            OperatorType::LessThanEqualTo,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OperatorType::EqualTo => "Equal To",
            OperatorType::GreaterThan => "Greater Than",
            OperatorType::GreaterThanEqualTo => "Greater Than or Equal To",
            OperatorType::LessThan => "Less Than",
            OperatorType::LessThanEqualTo => "Less Than Or Equal To",
        }
    }

    pub fn short_alias(&self) -> &'static str {
        match self {
            OperatorType::EqualTo => "et",
            OperatorType::GreaterThan => "gt",
            OperatorType::GreaterThanEqualTo => "gte",
            OperatorType::LessThan => "lt",
            OperatorType::LessThanEqualTo => "lte",
        }
    }

    pub fn parse_lenient(s: &str) -> Option<OperatorType> {
        match s.to_lowercase().as_str() {
            "et" | "equal to" | "equalto" | "equal" | "==" => Some(OperatorType::EqualTo),
            "gt" | "greater" | "greater than" | "greaterthan" | ">" => {
                Some(OperatorType::GreaterThan)
            }
            "gte" | "greater than or equal to" | "greaterthanorequalto" | ">=" => {
                Some(OperatorType::GreaterThanEqualTo)
            }
            "lt" | "less" | "less than" | "lessthan" | "<" => Some(OperatorType::LessThan),
            "lte" | "less than or equal to" | "lessthanorequalto" | "<=" => {
                Some(OperatorType::LessThanEqualTo)
            }
            _ => None,
        }
    }
}

impl fmt::Display for OperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OperatorType {
    type Err = CommonsError;

    fn from_str(s: &str) -> Result<Self> {
        OperatorType::parse_lenient(s).ok_or_else(|| CommonsError::UnknownOperator(s.to_string()))
    }
}
