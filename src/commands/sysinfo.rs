use crate::adb::sysinfo;
use crate::cli::OutputType;
use crate::commands::render;
use crate::error::Result;
use crate::output::Property;

pub async fn battery(serial: Option<&str>, output: OutputType) -> Result<()> {
    let info = sysinfo::battery_info(serial).await?;
    render(&Property::from_map(&info), output)
}

pub async fn meminfo(serial: Option<&str>, output: OutputType) -> Result<()> {
    let info = sysinfo::memory_info(serial).await?;
    render(&Property::from_map(&info), output)
}

pub async fn storage(serial: Option<&str>, output: OutputType) -> Result<()> {
    let entries = sysinfo::storage_info(serial).await?;
    render(&entries, output)
}
