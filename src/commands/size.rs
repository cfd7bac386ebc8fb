use crate::error::Result;
use crate::filter::{calculate_tolerances, operator_size_matches};
use crate::models::OperatorType;
use crate::storage::formatting::{format_size, parse_size};
use clap::Subcommand;
use colored::Colorize;
use log::debug;

#[derive(Subcommand, Debug)]
pub enum SizeCommand {
    /// Format a byte count with a binary unit
    Format {
        /// Number of bytes
        #[arg(allow_negative_numbers = true)]
        bytes: i64,
    },
    /// Convert a size such as "1.5MB" to bytes
    Parse {
        /// Size with unit (B, KB, MB, GB, TB, PB)
        size: String,
    },
    /// Compare a file size against a wanted size
    Match {
        /// Comparison operator (e.g., "gt", ">=", "equal to")
        operator: String,
        /// Wanted size in bytes or with a unit
        wanted: String,
        /// Actual file size in bytes or with a unit
        file_size: String,
        /// Tolerance in KB applied to equality comparisons
        #[arg(long, default_value_t = 0.0)]
        tolerance: f64,
    },
}

impl SizeCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            SizeCommand::Format { bytes } => {
                println!("{}", format_size(bytes));
                Ok(())
            }
            SizeCommand::Parse { size } => {
                println!("{}", parse_size(&size)?);
                Ok(())
            }
            SizeCommand::Match {
                operator,
                wanted,
                file_size,
                tolerance,
            } => match_size(&operator, &wanted, &file_size, tolerance),
        }
    }
}

/// Accepts either a plain byte count or a size with a unit.
fn parse_bytes(input: &str) -> Result<i64> {
    match input.trim().parse::<i64>() {
        Ok(bytes) => Ok(bytes),
        Err(_) => parse_size(input),
    }
}

fn match_size(operator: &str, wanted: &str, file_size: &str, tolerance: f64) -> Result<()> {
    let operator: OperatorType = operator.parse()?;
    let wanted = parse_bytes(wanted)?;
    let file_size = parse_bytes(file_size)?;

    let bounds = calculate_tolerances(wanted, tolerance)?;
    debug!(
        "Tolerance window for {wanted} bytes: {}..={}",
        bounds.lower_bound_size, bounds.upper_bound_size
    );

    let matched = operator_size_matches(operator, wanted, tolerance, file_size)?;
    let mark = if matched {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };

    println!(
        "{mark} {} {} {}",
        format_size(file_size),
        operator.name().to_lowercase(),
        format_size(wanted)
    );

    Ok(())
}
