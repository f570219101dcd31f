//! Canned adb output used across parser tests.

pub const DEVICES_L: &str = "\
* daemon not running; starting now at tcp:5037
* daemon started successfully
List of devices attached
emulator-5554          device product:sdk_gphone64_x86_64 model:sdk_gphone64_x86_64 device:emu64x transport_id:1
abc123def456           unauthorized usb:1-1 transport_id:2

192.168.1.100:5555     offline
";

pub const GETPROP: &str = "\
[ro.product.model]: [Pixel]
[ro.product.brand]: [google]
[ro.build.version.release]: [14]
[ro.build.version.sdk]: [34]
this line has no brackets
[persist.sys.timezone]: [UTC]
";

pub const PM_LIST_PACKAGES: &str = "\
package:com.example.app
package:com.android.chrome

package:org.mozilla.firefox
";

pub const DUMPSYS_WINDOW: &str = "\
WINDOW MANAGER WINDOWS (dumpsys window windows)
  Window #0 Window{1234 u0 StatusBar}:
  mCurrentFocus=Window{abcd u0 com.example.app/com.example.app.MainActivity}
  mFocusedApp=AppWindowToken{5678 token=Token{...}}
";

pub const DUMPSYS_PACKAGE: &str = "\
Packages:
  Package [com.example.app] (12ab34):
    userId=10123
    pkg=Package{56cd78 com.example.app}
    codePath=/data/app/com.example.app
";

pub const LS_LA: &str = "\
total 12
drwxrwx--x  4 root sdcard_rw 4096 2024-01-05 10:15 Download
-rw-r--r--  1 root root      4096 Jan  1 00:00 file.txt
-rw-rw----  1 root sdcard_rw 1024 2024-01-05 10:20 my notes.txt
garbage line
lrwxrwxrwx  1 root root        21 2024-01-01 00:00 sdcard -> /storage/self/primary
";

pub const DF_H: &str = "\
Filesystem        Size  Used Avail Use% Mounted on
/dev/block/dm-0   2.9G  2.8G  55M   99% /
tmpfs             1.9G  1.1M 1.9G    1% /dev
/dev/fuse          11G  7.5G 3.6G   68% /storage/emulated
short line
";

pub const DUMPSYS_BATTERY: &str = "\
Current Battery Service state:
  AC powered: false
  USB powered: true
  level: 93
  scale: 100
  temperature: 260
  technology: Li-ion
";

pub const PROC_MEMINFO: &str = "\
MemTotal:        5917096 kB
MemFree:          253904 kB
MemAvailable:    2628180 kB
Buffers:            4548 kB
";

pub const FORWARD_LIST: &str = "\
emulator-5554 tcp:8080 tcp:8081
abc123def456 tcp:9222 localabstract:chrome_devtools_remote

";
