//! Content digests for before/after verification
//!
//! The old digest identifies a legacy map by content: object keys are
//! canonically ordered, and the per-difficulty element collections (whose
//! order on disk carries no meaning) are hashed as sorted sets. The new
//! digest is taken over the exact bytes that are (or would be) written.

use crate::error::{ConvertError, Result};
use crate::migration::{OldDifficulty, OldInfo};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Difficulty keys whose element order is not meaningful
const UNORDERED_KEYS: &[&str] = &["_BPMChanges", "_events", "_notes", "_obstacles", "_bookmarks"];

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|source| ConvertError::Serialize {
        what: "legacy record",
        source,
    })
}

fn encode(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|source| ConvertError::Serialize {
        what: "legacy record",
        source,
    })
}

/// Feed one length-prefixed chunk so adjacent chunks cannot run together
fn update_chunk(hasher: &mut Sha256, chunk: &[u8]) {
    hasher.update((chunk.len() as u64).to_le_bytes());
    hasher.update(chunk);
}

fn update_difficulty(hasher: &mut Sha256, difficulty: &OldDifficulty) -> Result<()> {
    let mut value = to_value(difficulty)?;
    let mut collections = Vec::with_capacity(UNORDERED_KEYS.len());
    if let Value::Object(map) = &mut value {
        for key in UNORDERED_KEYS {
            collections.push(map.remove(*key).unwrap_or(Value::Null));
        }
    }
    update_chunk(hasher, &encode(&value)?);

    for collection in collections {
        let mut elements = match collection {
            Value::Array(items) => items.iter().map(encode).collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };
        elements.sort_unstable();
        hasher.update((elements.len() as u64).to_le_bytes());
        for element in &elements {
            update_chunk(hasher, element);
        }
    }
    Ok(())
}

/// Digest of a legacy map's content
///
/// `difficulties` follow the index's `difficulty_levels` order.
pub fn old_digest(info: &OldInfo, difficulties: &[OldDifficulty]) -> Result<String> {
    let mut hasher = Sha256::new();
    update_chunk(&mut hasher, &encode(&to_value(info)?)?);
    for difficulty in difficulties {
        update_difficulty(&mut hasher, difficulty)?;
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digest of the converted output: the index bytes followed by each
/// difficulty payload in set and rank order
pub fn new_digest<'a>(
    info_bytes: &[u8],
    difficulty_bytes: impl IntoIterator<Item = &'a [u8]>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(info_bytes);
    for bytes in difficulty_bytes {
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}
