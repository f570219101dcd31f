use crate::adb::logcat;
use crate::commands::finish;
use crate::error::Result;

pub async fn run(
    tag: Option<&str>,
    lines: u32,
    clear: bool,
    serial: Option<&str>,
) -> Result<()> {
    if clear {
        return finish(logcat::clear(serial).await);
    }
    finish(logcat::dump(tag.unwrap_or(""), lines, serial).await)
}
