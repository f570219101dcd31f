use crate::adb::device;
use crate::cli::OutputType;
use crate::commands::render;
use crate::error::Result;
use crate::output::Property;

pub async fn devices(output: OutputType) -> Result<()> {
    let devices = device::list_devices().await?;
    render(&devices, output)
}

pub async fn getprop(
    prefix: Option<&str>,
    serial: Option<&str>,
    output: OutputType,
) -> Result<()> {
    let props = device::get_properties(serial).await?;
    let mut rows = Property::from_map(&props);
    if let Some(prefix) = prefix {
        rows.retain(|p| p.key.starts_with(prefix));
    }
    render(&rows, output)
}

pub async fn android_id(serial: Option<&str>) -> Result<()> {
    println!("{}", device::android_id(serial).await?);
    Ok(())
}

pub async fn screen_size(serial: Option<&str>) -> Result<()> {
    println!("{}", device::screen_size(serial).await?);
    Ok(())
}

pub async fn screen_density(serial: Option<&str>) -> Result<()> {
    println!("{}", device::screen_density(serial).await?);
    Ok(())
}

pub async fn ip_address(serial: Option<&str>) -> Result<()> {
    println!("{}", device::ip_address(serial).await?);
    Ok(())
}

pub async fn mac_address(serial: Option<&str>) -> Result<()> {
    println!("{}", device::mac_address(serial).await?);
    Ok(())
}
