use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputType {
    Table,
    Json,
    Plain,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target device serial (passed to adb as `-s`)
    #[arg(long, short = 's', global = true)]
    pub serial: Option<String>,

    /// Override the operation timeout in seconds
    #[arg(long, short = 't', global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputType::Table)]
    pub output: OutputType,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List connected devices
    Devices,

    /// Dump system properties
    Getprop {
        /// Only show properties whose name starts with this prefix
        prefix: Option<String>,
    },

    /// Print the device's android_id
    AndroidId,

    /// Print the physical screen resolution
    ScreenSize,

    /// Print the screen density
    ScreenDensity,

    /// Print the wlan0 IP address
    Ip,

    /// Print the wlan0 MAC address
    Mac,

    /// App lifecycle operations
    #[command(subcommand)]
    App(AppCommands),

    /// Copy a file to the device
    Push {
        local: PathBuf,
        remote: String,
    },

    /// Copy a file from the device
    Pull {
        remote: String,
        local: PathBuf,
    },

    /// List a directory on the device
    Ls {
        #[arg(default_value = "/sdcard/")]
        path: String,
    },

    /// Show battery status
    Battery,

    /// Show memory usage
    Meminfo,

    /// Show storage usage
    Storage,

    /// Take a screenshot
    Screenshot {
        /// Local save path (defaults to a timestamped file)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },

    /// Record the screen
    Screenrecord {
        /// Recording length in seconds
        #[arg(long = "time", default_value_t = 10)]
        time: u32,

        /// Local save path; without one the recording stays on the device
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },

    /// Inject input events
    #[command(subcommand)]
    Input(InputCommands),

    /// Dump or clear the device log
    Logcat {
        /// Only show messages from this tag
        #[arg(long)]
        tag: Option<String>,

        /// Number of recent lines to show (0 for the whole buffer)
        #[arg(short = 'n', long, default_value_t = 100)]
        lines: u32,

        /// Clear the log instead of dumping it
        #[arg(short = 'c', long)]
        clear: bool,
    },

    /// Run a raw shell command on the device
    Shell {
        /// The command string, passed through as a single argument
        command: String,

        /// Wrap the command in `su -c`
        #[arg(long)]
        root: bool,

        /// su binary to use with --root
        #[arg(long, default_value = "su")]
        su: String,
    },

    /// Manage host-to-device port forwards
    #[command(subcommand)]
    Forward(ForwardCommands),

    /// Manage device-to-host port reverses
    #[command(subcommand)]
    Reverse(ReverseCommands),
}

#[derive(Subcommand, Clone, Debug)]
pub enum AppCommands {
    /// Install an APK
    Install { apk: PathBuf },

    /// Uninstall a package
    Uninstall { package: String },

    /// List installed packages (third-party only by default)
    List {
        /// Include system packages
        #[arg(long)]
        system: bool,
    },

    /// Launch an app
    Start {
        package: String,

        /// Activity to launch; without one a launcher event is sent instead
        #[arg(default_value = "")]
        activity: String,
    },

    /// Force-stop an app
    Stop { package: String },

    /// Clear an app's data
    Clear { package: String },

    /// Show the currently focused activity
    Activity,

    /// Show where a package is installed
    Path { package: String },

    /// Show a package's user id
    Uid { package: String },

    /// Show the pid of a running app
    Pid { package: String },

    /// Dump recent log lines for one app
    Log {
        package: String,

        #[arg(short = 'n', long, default_value_t = 100)]
        lines: u32,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum InputCommands {
    /// Type text (spaces and `&` are escaped for the device shell)
    Text { text: String },

    /// Send a key event code
    Key { keycode: i32 },

    /// Tap at coordinates
    Tap { x: i32, y: i32 },

    /// Swipe between two points
    Swipe {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,

        /// Swipe duration in milliseconds
        #[arg(long, default_value_t = 300)]
        duration: i32,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ForwardCommands {
    /// Forward a host port to a device port
    Add { local: u16, remote: u16 },

    /// Remove a forward
    Remove { local: u16 },

    /// List active forwards
    List,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ReverseCommands {
    /// Reverse a device port to a host port
    Add { remote: u16, local: u16 },

    /// Remove a reverse
    Remove { remote: u16 },

    /// List active reverses
    List,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Devices)
    }
}
