use crate::error::Result;
use colored::*;
use comfy_table::Table;
use serde::Serialize;

pub mod device;
pub mod file;
pub mod property;

pub use property::Property;

/// Rows that can be rendered as a line of a table.
pub trait TableFormat {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Rows that can be rendered as unadorned, pipe-friendly text.
pub trait PlainFormat {
    fn plain(&self) -> String;
}

impl PlainFormat for String {
    fn plain(&self) -> String {
        self.clone()
    }
}

/// Unified output formatter for all commands
pub struct OutputFormatter {
    color_enabled: bool,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            color_enabled: true,
            quiet: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    #[allow(dead_code)]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Format items as a table
    pub fn table<T: TableFormat>(&self, items: &[T]) -> Result<()> {
        if self.quiet || items.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table.set_header(T::headers());
        table.load_preset(comfy_table::presets::NOTHING);

        for item in items {
            table.add_row(item.row());
        }

        println!("{}", table);
        Ok(())
    }

    /// Format a value as JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.color_enabled {
            crate::utils::print_colored_json(value)?;
        } else {
            let json = serde_json::to_string_pretty(value)?;
            println!("{}", json);
        }
        Ok(())
    }

    /// Format items as plain text
    pub fn plain<T: PlainFormat>(&self, items: &[T]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for item in items {
            println!("{}", item.plain());
        }
        Ok(())
    }

    /// Print a message (respecting quiet mode)
    pub fn message(&self, msg: &str) -> Result<()> {
        if !self.quiet {
            println!("{}", msg);
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, msg: &str) -> Result<()> {
        if !self.quiet {
            if self.color_enabled {
                println!("{}", msg.bright_green());
            } else {
                println!("{}", msg);
            }
        }
        Ok(())
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        if self.color_enabled {
            eprintln!("{}", msg.bright_red());
        } else {
            eprintln!("ERROR: {}", msg);
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
