//! Manifest assembly from a package file

use super::types::{Asset, Manifest};
use crate::core::checksum::ChunkHasher;
use crate::error::{ManifestError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Default chunk size for per-chunk MD5s
pub const DEFAULT_MD5_SIZE: i64 = 10 << 20; // 10MB

/// Builds a single-asset app manifest for a package
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    url: String,
    md5_size: i64,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            md5_size: DEFAULT_MD5_SIZE,
        }
    }

    /// URL the package will be served from
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = url.into();
        self
    }

    /// Requested chunk size in bytes (clamped to the file size when built)
    pub fn with_md5_size(mut self, md5_size: i64) -> Self {
        self.md5_size = md5_size;
        self
    }

    /// Open `path`, hash it and assemble the manifest.
    ///
    /// The file is closed before returning, on success and on error.
    pub fn build_from_path(&self, path: &Path) -> Result<Manifest> {
        validate_md5_size(self.md5_size)?;

        let mut file = File::open(path).map_err(|source| ManifestError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| ManifestError::Stat {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        debug!(path = %path.display(), size, "opened package");
        self.build_from_reader(&mut file, size)
    }

    /// Assemble the manifest from a stream whose total length is `size`.
    pub fn build_from_reader<R: Read>(&self, reader: &mut R, size: u64) -> Result<Manifest> {
        let md5_size = effective_md5_size(self.md5_size, size)?;

        // An empty package has nothing to hash
        let md5s = if md5_size == 0 {
            Vec::new()
        } else {
            ChunkHasher::new(md5_size as i64)?.hash_stream(reader)?
        };

        info!(
            size,
            md5_size,
            chunks = md5s.len(),
            url = %self.url,
            "built app manifest"
        );

        Ok(Manifest::single(Asset::software_package(
            md5_size,
            md5s,
            self.url.clone(),
        )))
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: build the manifest for `path` served at `url`
pub fn create_app_manifest(path: &Path, url: &str, md5_size: i64) -> Result<Manifest> {
    ManifestBuilder::new()
        .with_url(url)
        .with_md5_size(md5_size)
        .build_from_path(path)
}

/// Clamp a requested chunk size to the file size.
///
/// Non-positive requests are rejected regardless of the file size.
pub fn effective_md5_size(requested: i64, file_size: u64) -> Result<u64> {
    validate_md5_size(requested)?;
    Ok((requested as u64).min(file_size))
}

fn validate_md5_size(requested: i64) -> Result<()> {
    if requested <= 0 {
        return Err(ManifestError::InvalidChunkSize(requested));
    }
    Ok(())
}
