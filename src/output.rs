//! Property list encoding and output of manifests.

use crate::config::OutputFormat;
use crate::error::{ManifestError, Result};
use crate::manifest::Manifest;
use plist::XmlWriteOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Encode the whole manifest into memory.
pub fn encode(manifest: &Manifest, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Xml => {
            let options = XmlWriteOptions::default().indent(b' ', 2);
            plist::to_writer_xml_with_options(&mut buf, manifest, &options)?;
            if !buf.ends_with(b"\n") {
                buf.push(b'\n');
            }
        }
        OutputFormat::Binary => plist::to_writer_binary(&mut buf, manifest)?,
    }
    Ok(buf)
}

/// Encode and write the manifest to `writer`.
///
/// Encoding finishes before the first byte is written, so an encoding failure
/// leaves the sink untouched.
pub fn write_manifest<W: Write>(
    manifest: &Manifest,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    let bytes = encode(manifest, format)?;
    writer.write_all(&bytes).map_err(ManifestError::Write)?;
    writer.flush().map_err(ManifestError::Write)?;
    debug!(bytes = bytes.len(), ?format, "wrote manifest");
    Ok(())
}

/// Encode the manifest and write it to a file, replacing any existing content.
pub fn write_manifest_file(manifest: &Manifest, format: OutputFormat, path: &Path) -> Result<()> {
    let bytes = encode(manifest, format)?;
    std::fs::write(path, &bytes).map_err(ManifestError::Write)?;
    debug!(path = %path.display(), bytes = bytes.len(), ?format, "wrote manifest file");
    Ok(())
}
