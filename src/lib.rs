/*!
 * appmanifest - Apple software-update app manifests for enterprise packages
 *
 * Chunks a package into fixed-size blocks, hashes each block with MD5 and
 * emits the property list an update client uses to verify partial downloads:
 * - Streaming per-chunk MD5 calculation
 * - Manifest model with an explicit external key table
 * - XML (two-space indent) and binary property list output
 */

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;

// Re-export commonly used types
pub use config::{LogLevel, ManifestConfig, OutputFormat};
pub use crate::core::{calculate_md5s, ChunkHasher};
pub use error::{ManifestError, Result};
pub use manifest::{create_app_manifest, Manifest, ManifestBuilder, DEFAULT_MD5_SIZE};
pub use output::{encode, write_manifest, write_manifest_file};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git revision baked in at build time
pub const GIT_HASH: &str = match option_env!("APPMANIFEST_GIT_HASH") {
    Some(hash) => hash,
    None => "unknown",
};

/// Text printed by `--version`
pub fn version_info() -> String {
    format!("appmanifest - {}\ngit revision - {}", VERSION, GIT_HASH)
}
