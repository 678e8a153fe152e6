//! Reading legacy beatmap files
//!
//! Files are decoded by byte-order mark (UTF-8, UTF-16 LE or BE; plain UTF-8
//! without one), checked for JSON syntax, then decoded into the legacy
//! records.

use crate::error::{ConvertError, Result};
use crate::migration::{OldDifficulty, OldInfo};
use serde::de::{self, DeserializeOwned};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if body.len() % 2 != 0 {
        return None;
    }
    let units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

/// Decode raw file bytes into text according to their byte-order mark
pub fn decode_text(bytes: &[u8], path: &Path) -> Result<String> {
    let (decoded, encoding) = if let Some(body) = bytes.strip_prefix(UTF8_BOM) {
        (String::from_utf8(body.to_vec()).ok(), "UTF-8")
    } else if let Some(body) = bytes.strip_prefix(UTF16_LE_BOM) {
        (decode_utf16(body, u16::from_le_bytes), "UTF-16LE")
    } else if let Some(body) = bytes.strip_prefix(UTF16_BE_BOM) {
        (decode_utf16(body, u16::from_be_bytes), "UTF-16BE")
    } else {
        (String::from_utf8(bytes.to_vec()).ok(), "UTF-8")
    };

    decoded.ok_or_else(|| ConvertError::Encoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Read a file as text
///
/// A missing file comes back as the raw `io::ErrorKind::NotFound` error so
/// the caller can decide which not-found condition it is.
fn read_text(path: &Path) -> std::result::Result<Result<String>, io::Error> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes, path))
}

/// Parse text as JSON, then decode it into `T`
///
/// Broken syntax, and a document that is not an object at all, are
/// `Malformed`. Mistyped fields inside an object decode to zero values
/// in the legacy records and are not errors.
pub fn parse_json<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T> {
    let malformed = |source: serde_json::Error| ConvertError::Malformed {
        path: path.to_path_buf(),
        source,
    };
    let value: Value = serde_json::from_str(text).map_err(malformed)?;
    if !value.is_object() {
        return Err(malformed(de::Error::custom("expected a JSON object")));
    }
    serde_json::from_value(value).map_err(malformed)
}

fn read_json<T: DeserializeOwned>(
    path: &Path,
    not_found: impl FnOnce() -> ConvertError,
) -> Result<T> {
    match read_text(path) {
        Ok(text) => parse_json(&text?, path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found()),
        Err(e) => Err(ConvertError::io(path, e)),
    }
}

/// Load the legacy `info.json` of a map directory
pub fn read_info(dir: &Path, info_path: &Path) -> Result<OldInfo> {
    read_json(info_path, || ConvertError::InfoNotFound {
        dir: dir.to_path_buf(),
    })
}

/// Load one legacy difficulty data file
///
/// `reference` is the path as written in the index, used in the
/// not-found error.
pub fn read_difficulty(dir: &Path, reference: &str) -> Result<OldDifficulty> {
    read_json(&dir.join(reference), || ConvertError::DifficultyNotFound {
        dir: dir.to_path_buf(),
        reference: reference.to_string(),
    })
}
