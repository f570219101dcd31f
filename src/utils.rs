use colored::*;
use serde::Serialize;

use crate::error::Result;

/// Pretty-print a value as JSON with the object keys tinted.
pub fn print_colored_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut out = String::with_capacity(rendered.len());
    for line in rendered.lines() {
        match line.split_once(':') {
            Some((lhs, rhs)) if lhs.trim_start().starts_with('"') => {
                let indent = lhs.len() - lhs.trim_start().len();
                let key = lhs.trim_start().trim_matches('"');
                out.push_str(&" ".repeat(indent));
                out.push('"');
                out.push_str(&key.cyan().to_string());
                out.push_str("\":");
                out.push_str(rhs);
            }
            _ => out.push_str(line),
        }
        out.push('\n');
    }
    print!("{out}");
    Ok(())
}
