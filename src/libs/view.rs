use crate::libs::excursion::Excursion;
use crate::libs::vacation::Vacation;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn vacations(vacations: &[Vacation]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "LODGING", "START", "END"]);
        for vacation in vacations {
            table.add_row(row![
                vacation.id.unwrap_or(0),
                vacation.title,
                vacation.lodging,
                vacation.start_date_formatted(),
                vacation.end_date_formatted()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn excursions(excursions: &[Excursion]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DATE", "VACATION ID"]);
        for excursion in excursions {
            table.add_row(row![
                excursion.id.unwrap_or(0),
                excursion.title,
                excursion.date_formatted(),
                excursion.vacation_id
            ]);
        }
        table.printstd();

        Ok(())
    }
}
