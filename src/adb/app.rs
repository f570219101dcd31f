//! App lifecycle: install, launch, stop, and per-app inspection.

use super::{default_timeout, device_args, run_adb, INSTALL_TIMEOUT, LOGCAT_TIMEOUT};
use crate::error::{AdbError, Result};
use crate::exec::CommandOutput;

pub async fn install(apk_path: &str, serial: Option<&str>) -> CommandOutput {
    run_adb(&device_args(serial, ["install", apk_path]), INSTALL_TIMEOUT).await
}

pub async fn uninstall(package: &str, serial: Option<&str>) -> CommandOutput {
    run_adb(&device_args(serial, ["uninstall", package]), default_timeout()).await
}

/// List installed packages; third-party only unless `system_apps` is set.
pub async fn list_packages(serial: Option<&str>, system_apps: bool) -> Result<Vec<String>> {
    let mut args = vec!["shell", "pm", "list", "packages"];
    if !system_apps {
        args.push("-3");
    }
    let output = run_adb(&device_args(serial, args), default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_packages(&output.stdout))
}

/// Keep the `package:`-prefixed lines, prefix stripped.
pub(crate) fn parse_packages(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("package:"))
        .map(|pkg| pkg.trim().to_string())
        .collect()
}

/// Start an app: an explicit activity goes through `am start -n`; without
/// one, a monkey LAUNCHER event avoids having to know the main activity.
pub async fn start(package: &str, activity: &str, serial: Option<&str>) -> CommandOutput {
    let args = if activity.is_empty() {
        device_args(
            serial,
            [
                "shell",
                "monkey",
                "-p",
                package,
                "-c",
                "android.intent.category.LAUNCHER",
                "1",
            ],
        )
    } else {
        let component = format!("{package}/{activity}");
        device_args(serial, ["shell", "am", "start", "-n", component.as_str()])
    };
    run_adb(&args, default_timeout()).await
}

pub async fn stop(package: &str, serial: Option<&str>) -> CommandOutput {
    run_adb(
        &device_args(serial, ["shell", "am", "force-stop", package]),
        default_timeout(),
    )
    .await
}

pub async fn clear_data(package: &str, serial: Option<&str>) -> CommandOutput {
    run_adb(
        &device_args(serial, ["shell", "pm", "clear", package]),
        default_timeout(),
    )
    .await
}

/// First window-focus line of `dumpsys window windows`.
pub async fn current_activity(serial: Option<&str>) -> Result<String> {
    let args = device_args(serial, ["shell", "dumpsys", "window", "windows"]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    focus_line(&output.stdout).ok_or_else(|| AdbError::MarkerNotFound {
        marker: "mCurrentFocus".to_string(),
        command: "dumpsys window windows".to_string(),
    })
}

pub(crate) fn focus_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find(|l| l.contains("mCurrentFocus") || l.contains("mFocusedApp"))
        .map(|l| l.trim().to_string())
}

/// Install path(s) of a package, as `pm path` reports them.
pub async fn app_path(package: &str, serial: Option<&str>) -> CommandOutput {
    run_adb(
        &device_args(serial, ["shell", "pm", "path", package]),
        default_timeout(),
    )
    .await
}

/// The `userId=` line of `dumpsys package`.
pub async fn app_uid(package: &str, serial: Option<&str>) -> Result<String> {
    let args = device_args(serial, ["shell", "dumpsys", "package", package]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    uid_line(&output.stdout).ok_or_else(|| AdbError::MarkerNotFound {
        marker: "userId=".to_string(),
        command: format!("dumpsys package {package}"),
    })
}

pub(crate) fn uid_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find(|l| l.contains("userId="))
        .map(|l| l.trim().to_string())
}

/// Resolve the pid of a running app via `pidof -s`.
pub async fn pid_of(package: &str, serial: Option<&str>) -> Result<String> {
    let args = device_args(serial, ["shell", "pidof", "-s", package]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::AppNotRunning {
            package: package.to_string(),
        });
    }
    require_pid(package, &output.stdout)
}

pub(crate) fn require_pid(package: &str, stdout: &str) -> Result<String> {
    let pid = stdout.trim();
    if pid.is_empty() {
        return Err(AdbError::AppNotRunning {
            package: package.to_string(),
        });
    }
    Ok(pid.to_string())
}

/// Dump recent log lines for one app.
///
/// The pid is resolved first; without one the operation fails up front
/// and logcat is never invoked.
pub async fn app_logcat(package: &str, lines: u32, serial: Option<&str>) -> Result<CommandOutput> {
    let pid = pid_of(package, serial).await?;
    let pid_flag = format!("--pid={pid}");
    let count = lines.to_string();
    let args = device_args(
        serial,
        ["logcat", "-d", pid_flag.as_str(), "-t", count.as_str()],
    );
    Ok(run_adb(&args, LOGCAT_TIMEOUT).await)
}
