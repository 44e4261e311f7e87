//! App manifest documents
//!
//! An app manifest tells an Apple update client where to download a package
//! and how to verify it piece by piece:
//!
//! - **Manifest**: list of items
//! - **ManifestItem**: assets plus optional descriptive metadata
//! - **Asset**: `software-package` kind, chunk size, per-chunk MD5s and URL
//!
//! # Example
//!
//! ```no_run
//! use appmanifest::manifest::ManifestBuilder;
//! use std::path::Path;
//!
//! let manifest = ManifestBuilder::new()
//!     .with_url("https://example.com/app.pkg")
//!     .build_from_path(Path::new("app.pkg"))?;
//! assert_eq!(manifest.items.len(), 1);
//! # Ok::<(), appmanifest::ManifestError>(())
//! ```

pub mod builder;
pub mod keys;
pub mod types;

pub use builder::{create_app_manifest, effective_md5_size, ManifestBuilder, DEFAULT_MD5_SIZE};
pub use types::{Asset, BundleInfo, Manifest, ManifestItem, Metadata, SOFTWARE_PACKAGE_KIND};
