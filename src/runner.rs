//! Per-directory conversion driver
//!
//! `convert` runs one map directory through read, migrate, render, write,
//! hash and cleanup, and always produces exactly one `ConversionResult`.
//! Directories share nothing, so callers may run any number of conversions
//! at once; `spawn_conversion` and `convert_all` do that on tokio's
//! blocking pool and hand results back over a channel.

use crate::config::ConvertFlags;
use crate::error::{ConvertError, Result};
use crate::hash::old_digest;
use crate::migration::{OldDifficulty, OldInfo, migrate};
use crate::reader::{read_difficulty, read_info};
use crate::schema::difficulty_rank;
use crate::writer::{remove_sources, render};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Name of the legacy index file
pub const INFO_JSON: &str = "info.json";

/// Outcome class of one directory's conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Output written (or rendered, on a dry run) with no error
    Converted,
    /// No `info.json`; nothing was read or written
    Skipped,
    /// A difficulty file listed in the index is missing; nothing was written
    MissingDifficulty,
    /// Any other error, including a legacy digest failure after writing
    Failed,
}

/// Summary of one directory's conversion
#[derive(Debug)]
pub struct ConversionResult {
    pub dir: PathBuf,
    /// Digest of the legacy content; empty if it could not be computed
    pub old_hash: String,
    /// Digest of the converted output; empty if conversion did not finish
    pub new_hash: String,
    /// `None` on success
    pub error: Option<ConvertError>,
    /// Superseded source files that could not be deleted
    pub failed_deletes: Vec<PathBuf>,
}

impl ConversionResult {
    fn failed(dir: PathBuf, error: ConvertError) -> Self {
        Self {
            dir,
            old_hash: String::new(),
            new_hash: String::new(),
            error: Some(error),
            failed_deletes: Vec::new(),
        }
    }

    /// Outcome class derived from `error`
    pub fn status(&self) -> Status {
        match &self.error {
            None => Status::Converted,
            Some(ConvertError::InfoNotFound { .. }) => Status::Skipped,
            Some(ConvertError::DifficultyNotFound { .. }) => Status::MissingDifficulty,
            Some(_) => Status::Failed,
        }
    }

    /// Whether the directory converted without error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Resolve the map directory from a directory path or a path to `info.json`
pub fn resolve_dir(path: &Path) -> PathBuf {
    if path.file_name().is_some_and(|name| name == INFO_JSON) {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    } else {
        path.to_path_buf()
    }
}

/// Convert one map directory
pub fn convert(path: impl AsRef<Path>, flags: &ConvertFlags) -> ConversionResult {
    let dir = resolve_dir(path.as_ref());
    let result = match convert_dir(&dir, flags) {
        Ok(result) => result,
        Err(e) => ConversionResult::failed(dir, e),
    };

    if !flags.quiet {
        log_result(&result);
    }
    result
}

fn log_result(result: &ConversionResult) {
    let dir = result.dir.display();
    match (&result.error, result.status()) {
        (None, _) => info!(old = %result.old_hash, new = %result.new_hash, "Converted \"{}\"", dir),
        (Some(_), Status::Skipped) => warn!("No {} found in \"{}\", skipping!", INFO_JSON, dir),
        (Some(e), Status::MissingDifficulty) => warn!("{}, skipping!", e),
        (Some(e), _) => error!("Something went wrong when converting \"{}\": {}", dir, e),
    }
}

fn convert_dir(dir: &Path, flags: &ConvertFlags) -> Result<ConversionResult> {
    convert_dir_with(dir, flags, old_digest)
}

/// Directory conversion with the legacy digest function supplied by the caller
fn convert_dir_with(
    dir: &Path,
    flags: &ConvertFlags,
    digest_legacy: impl FnOnce(&OldInfo, &[OldDifficulty]) -> Result<String>,
) -> Result<ConversionResult> {
    let info_path = dir.join(INFO_JSON);
    let old_info = read_info(dir, &info_path)?;
    if !flags.quiet {
        info!("Converting \"{}\"", dir.display());
    }

    // Any difficulty that cannot be read aborts the whole directory
    let mut sources = vec![info_path];
    let mut difficulties: Vec<OldDifficulty> = Vec::with_capacity(old_info.difficulty_levels.len());
    for level in &old_info.difficulty_levels {
        difficulties.push(read_difficulty(dir, &level.json_path)?);
        sources.push(dir.join(&level.json_path));
    }

    let map = migrate(&old_info, &difficulties);
    if !flags.quiet {
        for beatmap in map.info.beatmaps() {
            if difficulty_rank(&beatmap.difficulty).is_none() {
                warn!(
                    "Unknown difficulty \"{}\" in \"{}\", ranked {}",
                    beatmap.difficulty,
                    dir.display(),
                    beatmap.difficulty_rank
                );
            }
        }
    }

    let rendered = render(&map)?;
    let new_hash = rendered.digest();
    let written = if flags.dry_run {
        Vec::new()
    } else {
        rendered.write_to(dir)?
    };

    let (old_hash, error) = match digest_legacy(&old_info, &difficulties) {
        Ok(hash) => (hash, None),
        Err(e) => (String::new(), Some(e)),
    };

    // Sources stay put when the legacy digest is unavailable so the run can be repeated
    let mut failed_deletes = Vec::new();
    if flags.deletes_sources() && error.is_none() {
        for (path, e) in remove_sources(&sources, &written) {
            if !flags.quiet {
                warn!("Could not delete \"{}\": {}", path.display(), e);
            }
            failed_deletes.push(path);
        }
    }

    Ok(ConversionResult {
        dir: dir.to_path_buf(),
        old_hash,
        new_hash,
        error,
        failed_deletes,
    })
}

/// Convert one directory on the blocking pool and send its result
///
/// The result is sent exactly once, even if the conversion panics. If the
/// receiver has gone away the result is dropped. A `limit` semaphore, when
/// given, bounds how many conversions run at the same time.
pub fn spawn_conversion(
    path: PathBuf,
    flags: ConvertFlags,
    limit: Option<Arc<Semaphore>>,
    tx: mpsc::UnboundedSender<ConversionResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _permit = match limit {
            Some(semaphore) => semaphore.acquire_owned().await.ok(),
            None => None,
        };

        let dir = resolve_dir(&path);
        let result = match tokio::task::spawn_blocking(move || convert(&path, &flags)).await {
            Ok(result) => result,
            Err(e) => ConversionResult::failed(
                dir.clone(),
                ConvertError::io(dir, io::Error::other(e.to_string())),
            ),
        };
        let _ = tx.send(result);
    })
}

/// Convert many directories concurrently, at most `jobs` at a time
///
/// Results arrive in completion order.
pub async fn convert_all(
    paths: Vec<PathBuf>,
    flags: ConvertFlags,
    jobs: usize,
) -> Vec<ConversionResult> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let limit = Arc::new(Semaphore::new(jobs.max(1)));
    let total = paths.len();

    for path in paths {
        spawn_conversion(path, flags, Some(limit.clone()), tx.clone());
    }
    drop(tx);

    let mut results = Vec::with_capacity(total);
    while let Some(result) = rx.recv().await {
        results.push(result);
    }
    results
}

/// Count results by status: `(converted, skipped, failed)`
///
/// Missing difficulties count as failures.
pub fn tally(results: &[ConversionResult]) -> (usize, usize, usize) {
    results.iter().fold((0, 0, 0), |(ok, skip, fail), r| match r.status() {
        Status::Converted => (ok + 1, skip, fail),
        Status::Skipped => (ok, skip + 1, fail),
        Status::MissingDifficulty | Status::Failed => (ok, skip, fail + 1),
    })
}
