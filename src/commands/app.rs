use crate::adb::app;
use crate::cli::{AppCommands, OutputType};
use crate::commands::{finish, render_lines};
use crate::error::Result;

pub async fn run(cmd: AppCommands, serial: Option<&str>, output: OutputType) -> Result<()> {
    match cmd {
        AppCommands::Install { apk } => finish(app::install(&apk.to_string_lossy(), serial).await),
        AppCommands::Uninstall { package } => finish(app::uninstall(&package, serial).await),
        AppCommands::List { system } => {
            let packages = app::list_packages(serial, system).await?;
            render_lines(&packages, output)
        }
        AppCommands::Start { package, activity } => {
            finish(app::start(&package, &activity, serial).await)
        }
        AppCommands::Stop { package } => finish(app::stop(&package, serial).await),
        AppCommands::Clear { package } => finish(app::clear_data(&package, serial).await),
        AppCommands::Activity => {
            println!("{}", app::current_activity(serial).await?);
            Ok(())
        }
        AppCommands::Path { package } => finish(app::app_path(&package, serial).await),
        AppCommands::Uid { package } => {
            println!("{}", app::app_uid(&package, serial).await?);
            Ok(())
        }
        AppCommands::Pid { package } => {
            println!("{}", app::pid_of(&package, serial).await?);
            Ok(())
        }
        AppCommands::Log { package, lines } => {
            finish(app::app_logcat(&package, lines, serial).await?)
        }
    }
}
