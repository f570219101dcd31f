//! Simulated input: typed text, key events, taps, and swipes.

use super::{default_timeout, device_args, run_adb};
use crate::exec::CommandOutput;

/// Escape literal text for `input text`.
///
/// Spaces become the `%s` placeholder and ampersands get a backslash;
/// nothing else is touched, so this is not full shell quoting.
pub fn escape_text(text: &str) -> String {
    text.replace(' ', "%s").replace('&', "\\&")
}

/// Type literal text on the device.
pub async fn text(text: &str, serial: Option<&str>) -> CommandOutput {
    let escaped = escape_text(text);
    run_adb(
        &device_args(serial, ["shell", "input", "text", escaped.as_str()]),
        default_timeout(),
    )
    .await
}

/// Send a key event by Android keycode.
pub async fn keyevent(keycode: i32, serial: Option<&str>) -> CommandOutput {
    let code = keycode.to_string();
    run_adb(
        &device_args(serial, ["shell", "input", "keyevent", code.as_str()]),
        default_timeout(),
    )
    .await
}

/// Tap at screen coordinates.
pub async fn tap(x: i32, y: i32, serial: Option<&str>) -> CommandOutput {
    let (x, y) = (x.to_string(), y.to_string());
    run_adb(
        &device_args(serial, ["shell", "input", "tap", x.as_str(), y.as_str()]),
        default_timeout(),
    )
    .await
}

/// Swipe between two points over `duration_ms` milliseconds.
pub async fn swipe(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    duration_ms: i32,
    serial: Option<&str>,
) -> CommandOutput {
    let coords = [
        x1.to_string(),
        y1.to_string(),
        x2.to_string(),
        y2.to_string(),
        duration_ms.to_string(),
    ];
    let args = device_args(
        serial,
        [
            "shell",
            "input",
            "swipe",
            coords[0].as_str(),
            coords[1].as_str(),
            coords[2].as_str(),
            coords[3].as_str(),
            coords[4].as_str(),
        ],
    );
    run_adb(&args, default_timeout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_ampersands_are_escaped() {
        assert_eq!(escape_text("hi there & bye"), "hi%sthere%s\\&%sbye");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(escape_text("user@host.com!?"), "user@host.com!?");
    }
}
