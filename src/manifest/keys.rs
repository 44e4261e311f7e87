//! External property list key names
//!
//! Update clients match on these strings, so they must not change.

/// `Manifest.items`
pub const ITEMS: &str = "items";

/// `ManifestItem.assets`
pub const ASSETS: &str = "assets";

/// `ManifestItem.metadata`, omitted when absent
pub const METADATA: &str = "metadata";

/// `Asset.kind` and `Metadata.kind`
pub const KIND: &str = "kind";

/// `Asset.md5_size`
pub const MD5_SIZE: &str = "md5-size";

/// `Asset.md5s`
pub const MD5S: &str = "md5s";

/// `Asset.url`
pub const URL: &str = "url";

/// `Metadata.subtitle`
pub const SUBTITLE: &str = "subtitle";

/// `Metadata.title`
pub const TITLE: &str = "title";

/// `Metadata.items`, omitted when empty
pub const METADATA_ITEMS: &str = ITEMS;

/// `BundleInfo.bundle_identifier`
pub const BUNDLE_IDENTIFIER: &str = "bundle-identifier";

/// `BundleInfo.bundle_version`
pub const BUNDLE_VERSION: &str = "bundle-version";
