//! Excursion management commands.
//!
//! The date-within-vacation check happens here, before submission, because
//! it needs the parent record; the store only enforces that the parent
//! exists at all.

use crate::commands::vacation::{open_repository, parse_date};
use crate::libs::excursion::Excursion;
use crate::libs::messages::Message;
use crate::libs::repository::RepoError;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ExcursionArgs {
    #[command(subcommand)]
    command: ExcursionCommands,
}

#[derive(Debug, Subcommand)]
enum ExcursionCommands {
    #[command(about = "Add an excursion to a vacation")]
    Add {
        title: String,
        #[arg(short, long)]
        vacation_id: i64,
        #[arg(short, long, value_parser = parse_date)]
        date: NaiveDate,
    },
    #[command(about = "Edit an excursion")]
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    #[command(about = "Delete an excursion")]
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    #[command(about = "List excursions, all or for one vacation")]
    List {
        #[arg(short, long)]
        vacation_id: Option<i64>,
    },
}

pub fn cmd(args: ExcursionArgs) -> Result<()> {
    match args.command {
        ExcursionCommands::Add { title, vacation_id, date } => handle_add(title, vacation_id, date),
        ExcursionCommands::Edit { id, title, date } => handle_edit(id, title, date),
        ExcursionCommands::Delete { id, yes } => handle_delete(id, yes),
        ExcursionCommands::List { vacation_id } => handle_list(vacation_id),
    }
}

fn handle_add(title: String, vacation_id: i64, date: NaiveDate) -> Result<()> {
    let excursion = Excursion::new(&title, vacation_id, date);
    excursion.validate()?;

    let repository = open_repository()?;

    let vacation = match repository.vacation_by_id(vacation_id).wait()? {
        Some(vacation) => vacation,
        None => {
            msg_error!(Message::ExcursionOrphanRejected(vacation_id));
            return Ok(());
        }
    };
    if !vacation.contains(date) {
        msg_error!(Message::ExcursionOutsideVacation(excursion.date_formatted(), vacation.range_formatted()));
        return Ok(());
    }

    match repository.add_excursion(excursion).wait() {
        Ok(_) => {
            msg_success!(Message::ExcursionAdded(title));
            Ok(())
        }
        // The vacation can vanish between the check and the insert.
        Err(RepoError::VacationNotFound(id)) => {
            msg_error!(Message::ExcursionOrphanRejected(id));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_edit(id: i64, title: Option<String>, date: Option<NaiveDate>) -> Result<()> {
    let repository = open_repository()?;

    let excursions = repository.all_excursions().wait()?;
    let mut excursion = match excursions.into_iter().find(|e| e.id == Some(id)) {
        Some(excursion) => excursion,
        None => {
            msg_error!(Message::ExcursionNotFound(id));
            return Ok(());
        }
    };

    if let Some(title) = title {
        excursion.title = title;
    }
    if let Some(date) = date {
        excursion.date = Some(date);
    }
    excursion.validate()?;

    if let Some(vacation) = repository.vacation_by_id(excursion.vacation_id).wait()? {
        if let Some(date) = excursion.date {
            if !vacation.contains(date) {
                msg_error!(Message::ExcursionOutsideVacation(excursion.date_formatted(), vacation.range_formatted()));
                return Ok(());
            }
        }
    }

    let updated_title = excursion.title.clone();
    repository.edit_excursion(excursion);
    msg_success!(Message::ExcursionUpdated(updated_title));
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let repository = open_repository()?;

    let excursions = repository.all_excursions().wait()?;
    let excursion = match excursions.into_iter().find(|e| e.id == Some(id)) {
        Some(excursion) => excursion,
        None => {
            msg_error!(Message::ExcursionNotFound(id));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteExcursion(excursion.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    repository.delete_excursion(id).wait()?;
    msg_success!(Message::ExcursionDeleted(excursion.title));
    Ok(())
}

fn handle_list(vacation_id: Option<i64>) -> Result<()> {
    let repository = open_repository()?;

    let excursions = match vacation_id {
        Some(vacation_id) => match repository.excursions_for_vacation(vacation_id).wait() {
            Ok(excursions) => excursions,
            Err(RepoError::VacationNotFound(id)) => {
                msg_error!(Message::VacationNotFound(id));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        },
        None => repository.all_excursions().wait()?,
    };

    if excursions.is_empty() {
        msg_info!(Message::ExcursionsNotFound);
        return Ok(());
    }

    msg_print!(Message::ExcursionListHeader, true);
    View::excursions(&excursions)?;
    Ok(())
}
