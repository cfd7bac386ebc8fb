use crate::error::{CommonsError, ErrorContext};
use colored::{ColoredString, Colorize};

pub fn format_error_chain(error: &CommonsError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}

fn paint(text: &str, use_color: bool, style: fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Format error for display to user with colors and formatting
pub fn format_error_with_color(error: &CommonsError, use_color: bool) -> String {
    let context = ErrorContext::new(error);
    let mut output = String::new();

    // Error header
    let header = paint("Error:", use_color, |s| s.red().bold());
    output.push_str(&format!("{header} {error}\n"));

    // Details
    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    // Suggestions
    if let Some(suggestion) = &context.suggestion {
        let title = paint("Suggestions:", use_color, |s| s.yellow().bold());
        output.push_str(&format!("\n{title}\n"));
        for line in suggestion.lines() {
            if !line.trim().is_empty() {
                let bullet = paint(&format!("• {line}"), use_color, |s| s.cyan());
                output.push_str(&format!("{bullet}\n"));
            }
        }
    }

    output
}
