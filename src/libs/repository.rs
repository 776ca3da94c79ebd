//! Asynchronous repository over the vacation and excursion stores.
//!
//! The repository is the only client-facing entry point to durable state.
//! Every operation is packaged as one unit of work, queued to a bounded
//! pool of worker threads, and answered through a one-shot reply channel.
//! Callers get a [`Reply`] back immediately; waiting on it is the explicit
//! synchronous adapter over the asynchronous API.
//!
//! Each worker owns its own store connections, so the stores themselves
//! never need locking. The one business rule spanning both tables lives
//! here: a vacation with dependent excursions is not deleted, and the
//! check-then-act sequence runs inside a single unit of work so no
//! excursion can slip in between the check and the delete.

use crate::db::db::DB_FILE_NAME;
use crate::db::excursions::Excursions;
use crate::db::vacations::Vacations;
use crate::libs::data_storage::DataStorage;
use crate::libs::excursion::Excursion;
use crate::libs::messages::Message;
use crate::libs::vacation::Vacation;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

/// Default number of worker threads in the pool.
pub const DEFAULT_WORKERS: usize = 4;

/// Typed outcome for repository operations.
///
/// Referential-integrity problems surface as `VacationNotFound` so callers
/// can branch on them; `Store` covers constraint violations that the
/// pre-checks should normally prevent.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("no vacation found with ID {0}")]
    VacationNotFound(i64),
    #[error("store operation failed: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("result did not arrive within the wait limit")]
    TimedOut,
    #[error("repository is closed")]
    Disconnected,
}

/// Both stores a worker needs, opened on the worker's own connections.
struct Stores {
    vacations: Vacations,
    excursions: Excursions,
}

impl Stores {
    fn open(path: &Path) -> Result<Self> {
        Ok(Stores {
            vacations: Vacations::open(path)?,
            excursions: Excursions::open(path)?,
        })
    }
}

type Job = Box<dyn FnOnce(&mut Stores) + Send>;

/// One-shot handle to a result that arrives on a worker thread.
///
/// The worker sends exactly once; dropping an unwanted `Reply` is fine.
pub struct Reply<T> {
    rx: Receiver<Result<T, RepoError>>,
}

impl<T> Reply<T> {
    /// Blocks until the result arrives.
    pub fn wait(self) -> Result<T, RepoError> {
        self.rx.recv().map_err(|_| RepoError::Disconnected)?
    }

    /// Blocks at most `limit`. An elapsed wait maps to [`RepoError::TimedOut`],
    /// a closed pool to [`RepoError::Disconnected`]; scan jobs treat either
    /// as an interrupted run.
    pub fn wait_timeout(self, limit: Duration) -> Result<T, RepoError> {
        match self.rx.recv_timeout(limit) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(RepoError::TimedOut),
            Err(RecvTimeoutError::Disconnected) => Err(RepoError::Disconnected),
        }
    }
}

/// The sole point of access to durable state.
///
/// Explicitly constructed with a database path and worker count; whoever
/// assembles the application controls its lifecycle. Dropping the
/// repository closes the job queue and joins every worker.
pub struct Repository {
    sender: Option<Sender<Job>>,
    // Keeps the job queue alive even when the pool has no workers, so an
    // unserved job waits out its limit instead of failing fast.
    _receiver: Arc<Mutex<Receiver<Job>>>,
    workers: Vec<JoinHandle<()>>,
}

impl Repository {
    /// Opens the repository at the default platform data path.
    pub fn open_default(workers: usize) -> Result<Self> {
        let path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| msg_error_anyhow!(Message::DbErrorConnection(e.to_string())))?;
        Self::open(path, workers)
    }

    /// Opens the repository over the database at `path` with a fixed-size
    /// worker pool.
    pub fn open(path: impl AsRef<Path>, workers: usize) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();

        // Open once up front so the schema exists and path problems surface
        // to the caller instead of dying inside a worker.
        Stores::open(&path)?;

        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));
        let mut handles = Vec::with_capacity(workers);
        for n in 0..workers {
            let receiver = Arc::clone(&receiver);
            let worker_path = path.clone();
            let handle = thread::Builder::new().name(format!("vplan-repo-{}", n)).spawn(move || {
                let mut stores = match Stores::open(&worker_path) {
                    Ok(stores) => stores,
                    Err(e) => {
                        tracing::error!(error = %e, "repository worker could not open stores");
                        return;
                    }
                };
                loop {
                    // Hold the lock only while receiving, never while a job runs.
                    let job = match receiver.lock() {
                        Ok(guard) => guard.recv(),
                        Err(_) => break,
                    };
                    match job {
                        Ok(job) => job(&mut stores),
                        Err(_) => break,
                    }
                }
            })?;
            handles.push(handle);
        }

        Ok(Repository {
            sender: Some(sender),
            _receiver: receiver,
            workers: handles,
        })
    }

    fn submit<T, F>(&self, op: F) -> Reply<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Stores) -> Result<T, RepoError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let job: Job = Box::new(move |stores| {
            // The receiver may have been dropped; a refused reply is fine.
            let _ = tx.send(op(stores));
        });
        if let Some(sender) = &self.sender {
            // A refused send drops the job and with it the reply sender,
            // so a waiting caller sees Disconnected.
            let _ = sender.send(job);
        }
        Reply { rx }
    }

    fn submit_detached<F>(&self, op: F)
    where
        F: FnOnce(&mut Stores) + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Box::new(op));
        }
    }

    /// Inserts a vacation; the reply carries the generated id. Never fails
    /// for well-formed input.
    pub fn add_vacation(&self, vacation: Vacation) -> Reply<i64> {
        tracing::debug!(title = %vacation.title, "add_vacation");
        self.submit(move |stores| Ok(stores.vacations.insert(&vacation)?))
    }

    /// Fire-and-forget update by id. Updating a vanished id is a silent
    /// no-op at the store level.
    pub fn edit_vacation(&self, vacation: Vacation) {
        tracing::debug!(title = %vacation.title, "edit_vacation");
        self.submit_detached(move |stores| match stores.vacations.update(&vacation) {
            Ok(0) => tracing::debug!(id = ?vacation.id, "edit_vacation: no matching row"),
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "edit_vacation failed"),
        });
    }

    /// Deletes the vacation only if no excursion references it; the reply
    /// carries `true` on deletion and `false` when the guard blocked it.
    /// Check and delete run as one unit of work on one worker.
    pub fn delete_vacation(&self, id: i64) -> Reply<bool> {
        tracing::debug!(id, "delete_vacation");
        self.submit(move |stores| {
            let excursions = stores.excursions.fetch_for_vacation(id)?;
            if excursions.is_empty() {
                stores.vacations.delete(id)?;
                Ok(true)
            } else {
                Ok(false)
            }
        })
    }

    pub fn vacation_by_id(&self, id: i64) -> Reply<Option<Vacation>> {
        tracing::debug!(id, "vacation_by_id");
        self.submit(move |stores| Ok(stores.vacations.fetch_by_id(id)?))
    }

    pub fn all_vacations(&self) -> Reply<Vec<Vacation>> {
        tracing::debug!("all_vacations");
        self.submit(move |stores| Ok(stores.vacations.fetch_all()?))
    }

    /// Inserts an excursion after confirming its vacation exists; a missing
    /// parent yields [`RepoError::VacationNotFound`] and no record.
    pub fn add_excursion(&self, excursion: Excursion) -> Reply<i64> {
        tracing::debug!(vacation_id = excursion.vacation_id, "add_excursion");
        self.submit(move |stores| {
            if stores.vacations.fetch_by_id(excursion.vacation_id)?.is_none() {
                return Err(RepoError::VacationNotFound(excursion.vacation_id));
            }
            Ok(stores.excursions.insert(&excursion)?)
        })
    }

    /// Fire-and-forget update, same vanished-id caveat as [`Repository::edit_vacation`].
    pub fn edit_excursion(&self, excursion: Excursion) {
        tracing::debug!(title = %excursion.title, "edit_excursion");
        self.submit_detached(move |stores| match stores.excursions.update(&excursion) {
            Ok(0) => tracing::debug!(id = ?excursion.id, "edit_excursion: no matching row"),
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "edit_excursion failed"),
        });
    }

    /// Unconditional delete; the reply always carries `true` on completion.
    pub fn delete_excursion(&self, id: i64) -> Reply<bool> {
        tracing::debug!(id, "delete_excursion");
        self.submit(move |stores| {
            stores.excursions.delete(id)?;
            Ok(true)
        })
    }

    /// Excursions for one vacation, in insertion order. The reply is always
    /// delivered: a missing parent yields [`RepoError::VacationNotFound`]
    /// rather than leaving the caller waiting.
    pub fn excursions_for_vacation(&self, vacation_id: i64) -> Reply<Vec<Excursion>> {
        tracing::debug!(vacation_id, "excursions_for_vacation");
        self.submit(move |stores| {
            if stores.vacations.fetch_by_id(vacation_id)?.is_none() {
                return Err(RepoError::VacationNotFound(vacation_id));
            }
            Ok(stores.excursions.fetch_for_vacation(vacation_id)?)
        })
    }

    pub fn all_excursions(&self) -> Reply<Vec<Excursion>> {
        tracing::debug!("all_excursions");
        self.submit(move |stores| Ok(stores.excursions.fetch_all()?))
    }
}

impl Drop for Repository {
    fn drop(&mut self) {
        // Closing the queue lets every worker drain and exit.
        self.sender.take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}
