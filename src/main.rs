use std::time::Duration;

use clap::Parser;
use colored::*;

use adbx::cli::{Cli, Commands};
use adbx::commands;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Some(secs) = cli.timeout {
        adbx::adb::set_default_timeout(Duration::from_secs(secs));
    }

    let serial = cli.serial.as_deref();
    let output = cli.output;

    let result = match cli.command() {
        Commands::Devices => commands::device::devices(output).await,
        Commands::Getprop { prefix } => {
            commands::device::getprop(prefix.as_deref(), serial, output).await
        }
        Commands::AndroidId => commands::device::android_id(serial).await,
        Commands::ScreenSize => commands::device::screen_size(serial).await,
        Commands::ScreenDensity => commands::device::screen_density(serial).await,
        Commands::Ip => commands::device::ip_address(serial).await,
        Commands::Mac => commands::device::mac_address(serial).await,
        Commands::App(cmd) => commands::app::run(cmd, serial, output).await,
        Commands::Push { local, remote } => commands::files::push(&local, &remote, serial).await,
        Commands::Pull { remote, local } => commands::files::pull(&remote, &local, serial).await,
        Commands::Ls { path } => commands::files::ls(&path, serial, output).await,
        Commands::Battery => commands::sysinfo::battery(serial, output).await,
        Commands::Meminfo => commands::sysinfo::meminfo(serial, output).await,
        Commands::Storage => commands::sysinfo::storage(serial, output).await,
        Commands::Screenshot { file } => commands::screen::screenshot(file, serial).await,
        Commands::Screenrecord { time, file } => {
            commands::screen::screenrecord(time, file, serial).await
        }
        Commands::Input(cmd) => commands::input::run(cmd, serial).await,
        Commands::Logcat { tag, lines, clear } => {
            commands::logcat::run(tag.as_deref(), lines, clear, serial).await
        }
        Commands::Shell { command, root, su } => {
            commands::shell::run(&command, root, &su, serial, cli.timeout).await
        }
        Commands::Forward(cmd) => commands::forward::forward(cmd, serial, output).await,
        Commands::Reverse(cmd) => commands::forward::reverse(cmd, serial, output).await,
    };

    if let Err(e) = result {
        eprintln!("{}", e.to_string().bright_red());
        std::process::exit(1);
    }
}
