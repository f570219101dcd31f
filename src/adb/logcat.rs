//! Log retrieval.

use super::{default_timeout, device_args, run_adb, LOGCAT_TIMEOUT};
use crate::exec::CommandOutput;

/// Dump the log buffer and exit (`logcat -d`).
pub async fn dump(filter_tag: &str, lines: u32, serial: Option<&str>) -> CommandOutput {
    let args = device_args(serial, dump_args(filter_tag, lines));
    run_adb(&args, LOGCAT_TIMEOUT).await
}

/// `lines > 0` caps the dump via `-t`; a non-empty tag keeps only that
/// tag (`TAG:*`) and silences everything else (`*:S`).
pub(crate) fn dump_args(filter_tag: &str, lines: u32) -> Vec<String> {
    let mut args: Vec<String> = vec!["logcat".to_string(), "-d".to_string()];
    if lines > 0 {
        args.push("-t".to_string());
        args.push(lines.to_string());
    }
    if !filter_tag.is_empty() {
        args.push(format!("{filter_tag}:*"));
        args.push("*:S".to_string());
    }
    args
}

/// Clear the log buffer (`logcat -c`).
pub async fn clear(serial: Option<&str>) -> CommandOutput {
    run_adb(&device_args(serial, ["logcat", "-c"]), default_timeout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_buffer_dump_has_no_line_cap() {
        assert_eq!(dump_args("", 0), vec!["logcat", "-d"]);
    }

    #[test]
    fn line_cap_comes_before_the_tag_filter() {
        assert_eq!(
            dump_args("ActivityManager", 50),
            vec!["logcat", "-d", "-t", "50", "ActivityManager:*", "*:S"]
        );
    }

    #[test]
    fn tag_filter_silences_everything_else() {
        assert_eq!(dump_args("MyTag", 0), vec!["logcat", "-d", "MyTag:*", "*:S"]);
    }
}
