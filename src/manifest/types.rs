//! App manifest document model
//!
//! Each type serializes itself against the key table in [`super::keys`], so
//! the Rust field names never leak into the document.

use super::keys;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Kind tag carried by every asset this tool emits
pub const SOFTWARE_PACKAGE_KIND: &str = "software-package";

/// Root document: the list of distributable items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub items: Vec<ManifestItem>,
}

/// One distributable item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestItem {
    pub assets: Vec<Asset>,

    /// Accepted by clients but not required; never populated by the builder
    pub metadata: Option<Metadata>,
}

/// A downloadable artifact and its per-chunk hashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub kind: String,

    /// Chunk size in bytes the hashes were computed with
    pub md5_size: u64,

    /// Lowercase hex MD5 per chunk, in file offset order
    pub md5s: Vec<String>,

    pub url: String,
}

/// Descriptive block for an item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    pub bundle_info: BundleInfo,
    pub items: Vec<BundleInfo>,
    pub kind: String,
    pub subtitle: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BundleInfo {
    pub bundle_identifier: String,
    pub bundle_version: String,
}

impl Manifest {
    /// Manifest holding a single item with a single asset
    pub fn single(asset: Asset) -> Self {
        Self {
            items: vec![ManifestItem {
                assets: vec![asset],
                metadata: None,
            }],
        }
    }

    /// Iterate every asset across all items
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.items.iter().flat_map(|item| item.assets.iter())
    }
}

impl Asset {
    /// A `software-package` asset
    pub fn software_package<S: Into<String>>(md5_size: u64, md5s: Vec<String>, url: S) -> Self {
        Self {
            kind: SOFTWARE_PACKAGE_KIND.to_string(),
            md5_size,
            md5s,
            url: url.into(),
        }
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut dict = serializer.serialize_struct("Manifest", 1)?;
        dict.serialize_field(keys::ITEMS, &self.items)?;
        dict.end()
    }
}

impl Serialize for ManifestItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.metadata.is_some());
        let mut dict = serializer.serialize_struct("ManifestItem", len)?;
        dict.serialize_field(keys::ASSETS, &self.assets)?;
        match &self.metadata {
            Some(metadata) => dict.serialize_field(keys::METADATA, metadata)?,
            None => dict.skip_field(keys::METADATA)?,
        }
        dict.end()
    }
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut dict = serializer.serialize_struct("Asset", 4)?;
        dict.serialize_field(keys::KIND, &self.kind)?;
        dict.serialize_field(keys::MD5_SIZE, &self.md5_size)?;
        dict.serialize_field(keys::MD5S, &self.md5s)?;
        dict.serialize_field(keys::URL, &self.url)?;
        dict.end()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 5 + usize::from(!self.items.is_empty());
        let mut dict = serializer.serialize_struct("Metadata", len)?;
        // Bundle info is embedded at the top level of the metadata dict
        dict.serialize_field(keys::BUNDLE_IDENTIFIER, &self.bundle_info.bundle_identifier)?;
        dict.serialize_field(keys::BUNDLE_VERSION, &self.bundle_info.bundle_version)?;
        if self.items.is_empty() {
            dict.skip_field(keys::METADATA_ITEMS)?;
        } else {
            dict.serialize_field(keys::METADATA_ITEMS, &self.items)?;
        }
        dict.serialize_field(keys::KIND, &self.kind)?;
        dict.serialize_field(keys::SUBTITLE, &self.subtitle)?;
        dict.serialize_field(keys::TITLE, &self.title)?;
        dict.end()
    }
}

impl Serialize for BundleInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut dict = serializer.serialize_struct("BundleInfo", 2)?;
        dict.serialize_field(keys::BUNDLE_IDENTIFIER, &self.bundle_identifier)?;
        dict.serialize_field(keys::BUNDLE_VERSION, &self.bundle_version)?;
        dict.end()
    }
}
