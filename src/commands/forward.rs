use crate::adb::forward;
use crate::cli::{ForwardCommands, OutputType, ReverseCommands};
use crate::commands::{finish, render};
use crate::error::Result;

pub async fn forward(cmd: ForwardCommands, serial: Option<&str>, output: OutputType) -> Result<()> {
    match cmd {
        ForwardCommands::Add { local, remote } => {
            finish(forward::forward(local, remote, serial).await)
        }
        ForwardCommands::Remove { local } => finish(forward::forward_remove(local, serial).await),
        ForwardCommands::List => {
            let entries = forward::forward_list(serial).await?;
            render(&entries, output)
        }
    }
}

pub async fn reverse(cmd: ReverseCommands, serial: Option<&str>, output: OutputType) -> Result<()> {
    match cmd {
        ReverseCommands::Add { remote, local } => {
            finish(forward::reverse(remote, local, serial).await)
        }
        ReverseCommands::Remove { remote } => finish(forward::reverse_remove(remote, serial).await),
        ReverseCommands::List => {
            let entries = forward::reverse_list(serial).await?;
            render(&entries, output)
        }
    }
}
