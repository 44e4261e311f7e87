/*!
 * Integration tests for appmanifest
 */

use plist::Value;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

use appmanifest::config::OutputFormat;
use appmanifest::manifest::{create_app_manifest, ManifestBuilder, DEFAULT_MD5_SIZE};
use appmanifest::{encode, write_manifest, ManifestError};

fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

fn parse(bytes: &[u8]) -> Value {
    Value::from_reader(Cursor::new(bytes.to_vec())).unwrap()
}

fn lookup<'a>(value: &'a Value, key: &str) -> &'a Value {
    value
        .as_dictionary()
        .and_then(|d| d.get(key))
        .unwrap_or_else(|| panic!("missing key {}", key))
}

#[test]
fn test_single_chunk_document() {
    let dir = tempdir().unwrap();
    let pkg = dir.path().join("y.pkg");
    std::fs::write(&pkg, b"tiny package payload").unwrap();

    let manifest = create_app_manifest(&pkg, "http://x/y.pkg", DEFAULT_MD5_SIZE).unwrap();
    let doc = parse(&encode(&manifest, OutputFormat::Xml).unwrap());

    let items = lookup(&doc, "items").as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert!(!items[0].as_dictionary().unwrap().contains_key("metadata"));

    let assets = lookup(&items[0], "assets").as_array().unwrap();
    assert_eq!(assets.len(), 1);

    let asset = &assets[0];
    assert_eq!(lookup(asset, "kind").as_string(), Some("software-package"));
    assert_eq!(lookup(asset, "md5-size").as_unsigned_integer(), Some(20));
    assert_eq!(lookup(asset, "url").as_string(), Some("http://x/y.pkg"));

    let md5s = lookup(asset, "md5s").as_array().unwrap();
    assert_eq!(md5s.len(), 1);
    assert_eq!(
        md5s[0].as_string(),
        Some(md5_hex(b"tiny package payload").as_str())
    );
}

#[test]
fn test_multi_chunk_document_in_file_order() {
    let dir = tempdir().unwrap();
    let pkg = dir.path().join("big.pkg");
    let data: Vec<u8> = (0..2500u32).map(|i| (i % 256) as u8).collect();
    std::fs::write(&pkg, &data).unwrap();

    let manifest = ManifestBuilder::new()
        .with_md5_size(1000)
        .build_from_path(&pkg)
        .unwrap();
    let doc = parse(&encode(&manifest, OutputFormat::Binary).unwrap());

    let items = lookup(&doc, "items").as_array().unwrap();
    let asset = &lookup(&items[0], "assets").as_array().unwrap()[0];
    assert_eq!(lookup(asset, "md5-size").as_unsigned_integer(), Some(1000));

    let md5s: Vec<&str> = lookup(asset, "md5s")
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_string().unwrap())
        .collect();
    let expected: Vec<String> = data.chunks(1000).map(md5_hex).collect();
    assert_eq!(md5s, expected);
}

#[test]
fn test_empty_package_document() {
    let dir = tempdir().unwrap();
    let pkg = dir.path().join("empty.pkg");
    std::fs::write(&pkg, b"").unwrap();

    let manifest = create_app_manifest(&pkg, "", DEFAULT_MD5_SIZE).unwrap();
    let doc = parse(&encode(&manifest, OutputFormat::Xml).unwrap());

    let items = lookup(&doc, "items").as_array().unwrap();
    let asset = &lookup(&items[0], "assets").as_array().unwrap()[0];
    assert_eq!(lookup(asset, "md5-size").as_unsigned_integer(), Some(0));
    assert!(lookup(asset, "md5s").as_array().unwrap().is_empty());
}

#[test]
fn test_unreadable_path_writes_nothing() {
    let mut sink = Vec::new();
    let result = create_app_manifest(Path::new("/no/such/dir/app.pkg"), "", DEFAULT_MD5_SIZE)
        .and_then(|m| write_manifest(&m, OutputFormat::Xml, &mut sink));

    assert!(matches!(result, Err(ManifestError::FileOpen { .. })));
    assert!(sink.is_empty());
}

#[test]
fn test_invalid_chunk_size_writes_nothing() {
    let dir = tempdir().unwrap();
    let pkg = dir.path().join("app.pkg");
    std::fs::write(&pkg, b"payload").unwrap();

    for size in [0, -10] {
        let mut sink = Vec::new();
        let result = create_app_manifest(&pkg, "", size)
            .and_then(|m| write_manifest(&m, OutputFormat::Xml, &mut sink));

        assert!(matches!(result, Err(ManifestError::InvalidChunkSize(s)) if s == size));
        assert!(sink.is_empty());
    }
}
