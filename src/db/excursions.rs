use crate::db::db::Db;
use crate::libs::excursion::Excursion;
use anyhow::Result;
use rusqlite::{params, Connection};
use std::path::Path;

// The vacation table is created here as well so the foreign key always has
// a target, whichever store touches the file first.
const SCHEMA_VACATIONS: &str = "CREATE TABLE IF NOT EXISTS vacation (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    lodging TEXT NOT NULL,
    start_date DATE,
    end_date DATE
)";
const SCHEMA_EXCURSIONS: &str = "CREATE TABLE IF NOT EXISTS excursion (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    date DATE,
    vacation_id INTEGER NOT NULL,
    FOREIGN KEY (vacation_id) REFERENCES vacation(id) ON DELETE RESTRICT
)";
const INDEX_EXCURSION_VACATION: &str = "CREATE INDEX IF NOT EXISTS idx_excursion_vacation ON excursion(vacation_id)";
const INSERT_EXCURSION: &str = "INSERT INTO excursion (title, date, vacation_id) VALUES (?1, ?2, ?3)";
const UPDATE_EXCURSION: &str = "UPDATE excursion SET title = ?2, date = ?3, vacation_id = ?4 WHERE id = ?1";
const DELETE_EXCURSION: &str = "DELETE FROM excursion WHERE id = ?1";
const SELECT_ALL_EXCURSIONS: &str = "SELECT id, title, date, vacation_id FROM excursion ORDER BY id";
const SELECT_EXCURSIONS_BY_VACATION: &str = "SELECT id, title, date, vacation_id FROM excursion WHERE vacation_id = ?1 ORDER BY id";

pub struct Excursions {
    conn: Connection,
}

impl Excursions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Self::init(db)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Self::init(db)
    }

    fn init(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_VACATIONS, [])?;
        db.conn.execute(SCHEMA_EXCURSIONS, [])?;
        db.conn.execute(INDEX_EXCURSION_VACATION, [])?;
        Ok(Excursions { conn: db.conn })
    }

    /// Inserts an excursion and returns the generated id. A dangling
    /// `vacation_id` fails with a foreign-key constraint violation.
    pub fn insert(&mut self, excursion: &Excursion) -> rusqlite::Result<i64> {
        self.conn
            .execute(INSERT_EXCURSION, params![excursion.title, excursion.date, excursion.vacation_id])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates an excursion by id and returns the number of affected rows.
    /// An id that no longer exists affects zero rows.
    pub fn update(&mut self, excursion: &Excursion) -> rusqlite::Result<usize> {
        self.conn.execute(
            UPDATE_EXCURSION,
            params![excursion.id, excursion.title, excursion.date, excursion.vacation_id],
        )
    }

    pub fn delete(&mut self, id: i64) -> rusqlite::Result<usize> {
        self.conn.execute(DELETE_EXCURSION, params![id])
    }

    pub fn fetch_all(&mut self) -> rusqlite::Result<Vec<Excursion>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_EXCURSIONS)?;
        let excursion_iter = stmt.query_map([], |row| {
            Ok(Excursion {
                id: row.get(0)?,
                title: row.get(1)?,
                date: row.get(2)?,
                vacation_id: row.get(3)?,
            })
        })?;
        let mut excursions = Vec::new();
        for excursion in excursion_iter {
            excursions.push(excursion?);
        }
        Ok(excursions)
    }

    /// Excursions for one vacation, in insertion order.
    pub fn fetch_for_vacation(&mut self, vacation_id: i64) -> rusqlite::Result<Vec<Excursion>> {
        let mut stmt = self.conn.prepare(SELECT_EXCURSIONS_BY_VACATION)?;
        let excursion_iter = stmt.query_map(params![vacation_id], |row| {
            Ok(Excursion {
                id: row.get(0)?,
                title: row.get(1)?,
                date: row.get(2)?,
                vacation_id: row.get(3)?,
            })
        })?;
        let mut excursions = Vec::new();
        for excursion in excursion_iter {
            excursions.push(excursion?);
        }
        Ok(excursions)
    }
}
