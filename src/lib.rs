//! Beatmap Migration Library
//!
//! This library converts beatmaps from the legacy layout (an `info.json`
//! index plus one JSON file per difficulty) to the current layout (a
//! pretty-printed `info.dat` plus one compact `.dat` file per difficulty).
//!
//! # Architecture
//!
//! One conversion handles one map directory:
//! - **Reader**: `reader` - BOM-tolerant decoding and JSON validation
//! - **Migration**: `migration` - legacy records mapped onto the new `schema`
//! - **Writer**: `writer` - rendering, writing, and removal of superseded files
//! - **Hasher**: `hash` - digests of the legacy content and of the output
//! - **Runner**: `runner` - drives the above and reports a `ConversionResult`
//!
//! # Example
//!
//! ```no_run
//! use beatmap_migrate::{ConvertFlags, convert_all};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() {
//!     let flags = ConvertFlags { dry_run: true, ..Default::default() };
//!     let results = convert_all(vec![PathBuf::from("CustomSongs/song")], flags, 4).await;
//!     for result in results {
//!         println!("{} {:?} {}", result.dir.display(), result.status(), result.new_hash);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod migration;
pub mod reader;
pub mod runner;
pub mod schema;
pub mod writer;

// Re-export commonly used types
pub use config::ConvertFlags;
pub use error::{ConvertError, ErrorKind};
pub use migration::{MigratedMap, migrate};
pub use runner::{
    ConversionResult, INFO_JSON, Status, convert, convert_all, resolve_dir, spawn_conversion,
    tally,
};
pub use schema::{Characteristic, NewDifficulty, NewInfo, SCHEMA_VERSION};
pub use writer::{INFO_DAT, RenderedMap, render};
