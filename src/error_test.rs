use crate::error::AdbError;

#[test]
fn command_failed_carries_the_tool_diagnostic() {
    let err = AdbError::CommandFailed("error: device offline".to_string());
    assert!(format!("{}", err).contains("device offline"));
}

#[test]
fn device_errors_name_the_device() {
    let err = AdbError::DeviceNotFound("abc123".to_string());
    assert!(format!("{}", err).contains("abc123"));

    let err = AdbError::NoDevicesFound;
    assert!(format!("{}", err).contains("No devices"));
}

#[test]
fn marker_not_found_names_marker_and_command() {
    let err = AdbError::MarkerNotFound {
        marker: "userId=".to_string(),
        command: "dumpsys package com.example".to_string(),
    };
    let msg = format!("{}", err);
    assert!(msg.contains("userId="));
    assert!(msg.contains("dumpsys package"));
}

#[test]
fn io_errors_convert() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AdbError = io_err.into();
    assert!(format!("{}", err).contains("file not found"));
}

#[test]
fn strings_convert_to_other() {
    let err: AdbError = "something went wrong".to_string().into();
    assert!(format!("{}", err).contains("something went wrong"));
}
