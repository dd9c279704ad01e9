// src/processor.rs
//! Runs the ingestion pipeline: enumerate `.json` files in one directory,
//! parse them across a fixed-size worker pool, and merge the survivors.
//!
//! Per-file parse failures are isolated: they land in the report's failure
//! list and counter, never as an error to the caller. Only two things are
//! fatal here: the directory cannot be listed, or the pool fails to quiesce
//! within the timeout.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use walkdir::WalkDir;

use crate::error::{DeckstatError, Result};
use crate::model::Deck;
use crate::parser;

/// Upper bound on waiting for all dispatched parses to finish.
pub const DEFAULT_JOIN_TIMEOUT: Duration = Duration::from_secs(60);

/// Aggregated outcome of processing one directory.
#[derive(Debug, Default)]
pub struct ProcessReport {
    /// Successfully parsed decks. Order across files follows completion and
    /// is not meaningful; order within one file is preserved.
    pub decks: Vec<Deck>,
    pub succeeded: usize,
    pub failed: usize,
    /// One entry per failed file, for logging by the caller.
    pub failures: Vec<(PathBuf, String)>,
    pub duration_ms: u128,
}

impl ProcessReport {
    /// Number of candidate files that were dispatched.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Parses every `.json` file directly inside `dir` using `threads` workers.
///
/// An empty directory (or one with no `.json` files) is a valid empty
/// result, not an error.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be listed, `Pool` if the worker
/// pool cannot be built, and `Timeout` if the pool does not quiesce within
/// `timeout`.
pub fn process_directory(
    dir: &Path,
    threads: NonZeroUsize,
    timeout: Duration,
) -> Result<ProcessReport> {
    let files = find_json_files(dir)?;
    if files.is_empty() {
        return Ok(ProcessReport::default());
    }

    let start = Instant::now();
    let outcomes = run_pool(files, threads, timeout)?;

    let mut report = ProcessReport::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(mut decks) => {
                report.succeeded += 1;
                report.decks.append(&mut decks);
            }
            Err(e) => {
                report.failed += 1;
                report.failures.push((path, e.to_string()));
            }
        }
    }
    report.duration_ms = start.elapsed().as_millis();
    Ok(report)
}

/// Dispatches the files across a dedicated fixed-size pool and waits for
/// all of them, bounded by `timeout`.
///
/// Workers pull the next unfinished file as they go (rayon work stealing),
/// so uneven file sizes do not starve idle workers. Results come back over
/// a channel; each worker builds its decks privately, so no shared state is
/// written concurrently.
fn run_pool(
    files: Vec<PathBuf>,
    threads: NonZeroUsize,
    timeout: Duration,
) -> Result<Vec<(PathBuf, Result<Vec<Deck>>)>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .build()
        .map_err(|e| DeckstatError::Pool(e.to_string()))?;

    let (tx, rx) = mpsc::channel();
    pool.spawn(move || {
        let outcomes: Vec<(PathBuf, Result<Vec<Deck>>)> = files
            .into_par_iter()
            .map(|path| {
                let outcome = parser::parse_file(&path);
                (path, outcome)
            })
            .collect();
        // The receiver may already be gone if the caller timed out.
        let _ = tx.send(outcomes);
    });

    match rx.recv_timeout(timeout) {
        Ok(outcomes) => Ok(outcomes),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            // Dropping the pool joins its threads, which would block on the
            // very worker that failed to quiesce. Leak it instead.
            std::mem::forget(pool);
            Err(DeckstatError::Timeout {
                timeout_secs: timeout.as_secs(),
            })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(DeckstatError::Pool(
            "worker pool shut down before delivering results".to_string(),
        )),
    }
}

/// Lists regular files with a `.json` extension directly inside `dir`.
///
/// Enumeration order is whatever the filesystem yields; callers must not
/// rely on it.
fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| {
            // Name the entry that failed when the walker knows it; fall back
            // to the directory itself (e.g. the root listing failed).
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(io) => DeckstatError::io(io, path),
                None => DeckstatError::io(
                    std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed"),
                    path,
                ),
            }
        })?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "json") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
