//! CLI handlers, one module per command family. Each handler calls the
//! facade, renders through the output layer, and maps a failed invocation
//! onto the error path.

pub mod app;
pub mod device;
pub mod files;
pub mod forward;
pub mod input;
pub mod logcat;
pub mod screen;
pub mod shell;
pub mod sysinfo;

use serde::Serialize;

use crate::cli::OutputType;
use crate::error::{AdbError, Result};
use crate::exec::CommandOutput;
use crate::output::{OutputFormatter, PlainFormat, TableFormat};

/// Print an action's output and fold a failed invocation into an error.
pub(crate) fn finish(output: CommandOutput) -> Result<()> {
    let text = output.stdout.trim_end();
    if !text.is_empty() {
        println!("{text}");
    }
    if output.success {
        Ok(())
    } else {
        Err(AdbError::CommandFailed(output.stderr.trim().to_string()))
    }
}

/// Render rows in the requested format.
pub(crate) fn render<T>(items: &[T], output: OutputType) -> Result<()>
where
    T: TableFormat + PlainFormat + Serialize,
{
    let formatter = OutputFormatter::new();
    match output {
        OutputType::Table => formatter.table(items),
        OutputType::Json => formatter.json(&items),
        OutputType::Plain => formatter.plain(items),
    }
}

/// Render a flat list of strings; the table format has no columns here,
/// so table falls back to plain lines.
pub(crate) fn render_lines(lines: &[String], output: OutputType) -> Result<()> {
    let formatter = OutputFormatter::new();
    match output {
        OutputType::Json => formatter.json(&lines),
        _ => formatter.plain(lines),
    }
}
