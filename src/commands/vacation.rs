//! Vacation management commands.
//!
//! All mutations go through the repository; this layer only validates
//! input, waits on the reply, and renders the outcome.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::Repository;
use crate::libs::vacation::{Vacation, DATE_FORMAT};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct VacationArgs {
    #[command(subcommand)]
    command: VacationCommands,
}

#[derive(Debug, Subcommand)]
enum VacationCommands {
    #[command(about = "Add a vacation")]
    Add {
        title: String,
        #[arg(short, long)]
        lodging: String,
        #[arg(short, long, value_parser = parse_date)]
        start: NaiveDate,
        #[arg(short, long, value_parser = parse_date)]
        end: NaiveDate,
    },
    #[command(about = "Edit a vacation")]
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        lodging: Option<String>,
        #[arg(short, long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[arg(short, long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },
    #[command(about = "Delete a vacation (blocked while it has excursions)")]
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    #[command(about = "List all vacations")]
    List,
}

pub(crate) fn parse_date(arg: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(arg, DATE_FORMAT).map_err(|e| e.to_string())
}

pub(crate) fn open_repository() -> Result<Repository> {
    let config = Config::read()?;
    Repository::open_default(config.scan.workers)
}

pub fn cmd(args: VacationArgs) -> Result<()> {
    match args.command {
        VacationCommands::Add { title, lodging, start, end } => handle_add(title, lodging, start, end),
        VacationCommands::Edit { id, title, lodging, start, end } => handle_edit(id, title, lodging, start, end),
        VacationCommands::Delete { id, yes } => handle_delete(id, yes),
        VacationCommands::List => handle_list(),
    }
}

fn handle_add(title: String, lodging: String, start: NaiveDate, end: NaiveDate) -> Result<()> {
    let vacation = Vacation::new(&title, &lodging, start, end);
    vacation.validate()?;

    let repository = open_repository()?;
    repository.add_vacation(vacation).wait()?;
    msg_success!(Message::VacationAdded(title));
    Ok(())
}

fn handle_edit(id: i64, title: Option<String>, lodging: Option<String>, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    let repository = open_repository()?;

    let mut vacation = match repository.vacation_by_id(id).wait()? {
        Some(vacation) => vacation,
        None => {
            msg_error!(Message::VacationNotFound(id));
            return Ok(());
        }
    };

    if let Some(title) = title {
        vacation.title = title;
    }
    if let Some(lodging) = lodging {
        vacation.lodging = lodging;
    }
    if let Some(start) = start {
        vacation.start_date = Some(start);
    }
    if let Some(end) = end {
        vacation.end_date = Some(end);
    }
    vacation.validate()?;

    let updated_title = vacation.title.clone();
    repository.edit_vacation(vacation);
    msg_success!(Message::VacationUpdated(updated_title));
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let repository = open_repository()?;

    let vacation = match repository.vacation_by_id(id).wait()? {
        Some(vacation) => vacation,
        None => {
            msg_error!(Message::VacationNotFound(id));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteVacation(vacation.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if repository.delete_vacation(id).wait()? {
        msg_success!(Message::VacationDeleted(vacation.title));
    } else {
        msg_warning!(Message::VacationDeleteBlocked(vacation.title));
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let repository = open_repository()?;
    let vacations = repository.all_vacations().wait()?;

    if vacations.is_empty() {
        msg_info!(Message::VacationsNotFound);
        return Ok(());
    }

    msg_print!(Message::VacationListHeader, true);
    View::vacations(&vacations)?;
    Ok(())
}
