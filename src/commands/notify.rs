//! Notification preference command.
//!
//! The preference lives in the config file; the watch loop reads it when it
//! builds the alert gateway. This command only flips and reports the flag.

use crate::libs::{config::Config, messages::Message};
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NotifyArgs {
    #[command(subcommand)]
    command: NotifyCommands,
}

#[derive(Debug, Subcommand)]
enum NotifyCommands {
    #[command(about = "Enable notifications")]
    On,
    #[command(about = "Disable notifications")]
    Off,
    #[command(about = "Show the current preference")]
    Status,
}

pub fn cmd(args: NotifyArgs) -> Result<()> {
    let mut config = Config::read()?;
    match args.command {
        NotifyCommands::On => {
            config.notifications_enabled = true;
            config.save()?;
            msg_success!(Message::NotificationsEnabled);
        }
        NotifyCommands::Off => {
            config.notifications_enabled = false;
            config.save()?;
            msg_success!(Message::NotificationsDisabled);
        }
        NotifyCommands::Status => {
            msg_print!(Message::NotificationsStatus(config.notifications_enabled));
        }
    }
    Ok(())
}
