use std::path::Path;

use crate::adb::files;
use crate::cli::OutputType;
use crate::commands::{finish, render};
use crate::error::Result;

pub async fn push(local: &Path, remote: &str, serial: Option<&str>) -> Result<()> {
    finish(files::push(local, remote, serial).await)
}

pub async fn pull(remote: &str, local: &Path, serial: Option<&str>) -> Result<()> {
    finish(files::pull(remote, local, serial).await)
}

pub async fn ls(path: &str, serial: Option<&str>, output: OutputType) -> Result<()> {
    let entries = files::list_files(path, serial).await?;
    render(&entries, output)
}
