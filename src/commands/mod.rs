pub mod excursion;
pub mod init;
pub mod notify;
pub mod vacation;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage vacations")]
    Vacation(vacation::VacationArgs),
    #[command(about = "Manage excursions")]
    Excursion(excursion::ExcursionArgs),
    #[command(about = "Show or change the notification preference")]
    Notify(notify::NotifyArgs),
    #[command(about = "Run the reminder scans on a fixed schedule")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Vacation(args) => vacation::cmd(args),
            Commands::Excursion(args) => excursion::cmd(args),
            Commands::Notify(args) => notify::cmd(args),
            Commands::Watch => watch::cmd().await,
        }
    }
}
