use crate::db::db::Db;
use crate::libs::vacation::Vacation;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_VACATIONS: &str = "CREATE TABLE IF NOT EXISTS vacation (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    lodging TEXT NOT NULL,
    start_date DATE,
    end_date DATE
)";
const INSERT_VACATION: &str = "INSERT INTO vacation (title, lodging, start_date, end_date) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_VACATION: &str = "UPDATE vacation SET title = ?2, lodging = ?3, start_date = ?4, end_date = ?5 WHERE id = ?1";
const DELETE_VACATION: &str = "DELETE FROM vacation WHERE id = ?1";
const SELECT_ALL_VACATIONS: &str = "SELECT id, title, lodging, start_date, end_date FROM vacation ORDER BY id";
const SELECT_VACATION_BY_ID: &str = "SELECT id, title, lodging, start_date, end_date FROM vacation WHERE id = ?1";

pub struct Vacations {
    conn: Connection,
}

impl Vacations {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_VACATIONS, [])?;
        Ok(Vacations { conn: db.conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        db.conn.execute(SCHEMA_VACATIONS, [])?;
        Ok(Vacations { conn: db.conn })
    }

    /// Inserts a vacation and returns the generated id.
    pub fn insert(&mut self, vacation: &Vacation) -> rusqlite::Result<i64> {
        self.conn.execute(
            INSERT_VACATION,
            params![vacation.title, vacation.lodging, vacation.start_date, vacation.end_date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates a vacation by id and returns the number of affected rows.
    /// An id that no longer exists affects zero rows.
    pub fn update(&mut self, vacation: &Vacation) -> rusqlite::Result<usize> {
        self.conn.execute(
            UPDATE_VACATION,
            params![vacation.id, vacation.title, vacation.lodging, vacation.start_date, vacation.end_date],
        )
    }

    /// Deletes a vacation by id. Fails with a constraint violation while
    /// any excursion still references it.
    pub fn delete(&mut self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_VACATION, params![id])
    }

    pub fn fetch_all(&mut self) -> rusqlite::Result<Vec<Vacation>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_VACATIONS)?;
        let vacation_iter = stmt.query_map([], |row| {
            Ok(Vacation {
                id: row.get(0)?,
                title: row.get(1)?,
                lodging: row.get(2)?,
                start_date: row.get(3)?,
                end_date: row.get(4)?,
            })
        })?;
        let mut vacations = Vec::new();
        for vacation in vacation_iter {
            vacations.push(vacation?);
        }
        Ok(vacations)
    }

    pub fn fetch_by_id(&mut self, id: i64) -> rusqlite::Result<Option<Vacation>> {
        self.conn
            .query_row(SELECT_VACATION_BY_ID, params![id], |row| {
                Ok(Vacation {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    lodging: row.get(2)?,
                    start_date: row.get(3)?,
                    end_date: row.get(4)?,
                })
            })
            .optional()
    }
}
