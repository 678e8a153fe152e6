//! Rendering and writing converted maps
//!
//! `info.dat` is pretty-printed; difficulty `.dat` files are compact. The new
//! digest is computed over exactly these bytes, so the two formats must not
//! change independently of it.

use crate::error::{ConvertError, Result};
use crate::hash::new_digest;
use crate::migration::MigratedMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the converted index file
pub const INFO_DAT: &str = "info.dat";

/// Serialized output of one map, ready to hash or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMap {
    pub info: Vec<u8>,
    /// `(filename, bytes)` in set and rank order
    pub difficulties: Vec<(String, Vec<u8>)>,
}

impl RenderedMap {
    /// Content digest of the whole conversion output
    pub fn digest(&self) -> String {
        new_digest(
            &self.info,
            self.difficulties.iter().map(|(_, bytes)| bytes.as_slice()),
        )
    }

    /// Write every file into `dir`, returning the paths written
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.difficulties.len() + 1);
        for (filename, bytes) in &self.difficulties {
            let path = dir.join(filename);
            fs::write(&path, bytes).map_err(|e| ConvertError::io(&path, e))?;
            written.push(path);
        }

        let info_path = dir.join(INFO_DAT);
        fs::write(&info_path, &self.info).map_err(|e| ConvertError::io(&info_path, e))?;
        written.push(info_path);
        Ok(written)
    }
}

/// Serialize a migrated map
pub fn render(map: &MigratedMap) -> Result<RenderedMap> {
    let info = serde_json::to_vec_pretty(&map.info).map_err(|source| ConvertError::Serialize {
        what: INFO_DAT,
        source,
    })?;

    let difficulties = map
        .difficulties
        .iter()
        .map(|converted| {
            serde_json::to_vec(&converted.data)
                .map(|bytes| (converted.filename.clone(), bytes))
                .map_err(|source| ConvertError::Serialize {
                    what: "difficulty",
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedMap { info, difficulties })
}

/// Delete superseded source files
///
/// Paths listed in `keep` (files just written) are never removed, and a
/// path listed twice is removed once. Failures do not stop the remaining
/// deletes; they are returned to the caller.
pub fn remove_sources(sources: &[PathBuf], keep: &[PathBuf]) -> Vec<(PathBuf, io::Error)> {
    let mut failed = Vec::new();
    let mut removed: Vec<&PathBuf> = Vec::new();
    for source in sources {
        if keep.contains(source) || removed.contains(&source) {
            continue;
        }
        match fs::remove_file(source) {
            Ok(()) => removed.push(source),
            Err(e) => failed.push((source.clone(), e)),
        }
    }
    failed
}
