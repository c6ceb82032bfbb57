//! Reading the JSON manifest that lists every icon in the vendor set.

use crate::error::ExtractError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One manifest entry. Fields other than `name` and `path` are ignored.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct IconRecord {
    pub name: String,
    pub path: String,
}

/// Decodes a manifest document, keeping records in source order.
pub fn parse_manifest(content: &str) -> serde_json::Result<Vec<IconRecord>> {
    serde_json::from_str(content)
}

/// Reads and decodes the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<IconRecord>, ExtractError> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_manifest(&content).map_err(|source| ExtractError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded {} record(s) from manifest {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_source_order() {
        let records = parse_manifest(
            r#"[
                {"name": "Zebra", "path": "openmoji/1F993"},
                {"name": "Apple", "path": "openmoji/1F34E"},
                {"name": "Mouse", "path": "other/mouse"}
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zebra", "Apple", "Mouse"]);
        assert_eq!(records[1].path, "openmoji/1F34E");
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let records =
            parse_manifest(r#"[{"name": "Smile", "path": "openmoji/1F600", "tags": ["face"]}]"#)
                .unwrap();
        assert_eq!(
            records,
            vec![IconRecord {
                name: "Smile".to_string(),
                path: "openmoji/1F600".to_string(),
            }]
        );
    }

    #[test]
    fn parse_rejects_record_without_path() {
        let err = parse_manifest(r#"[{"name": "Smile"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `path`"));
    }

    #[test]
    fn parse_rejects_record_without_name() {
        let err = parse_manifest(r#"[{"path": "openmoji/1F600"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_manifest("[{\"name\": ").is_err());
        assert!(parse_manifest("{}").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let missing = dir.path().join("icons.json");

        let err = load_manifest(&missing).unwrap_err();
        assert!(matches!(err, ExtractError::ManifestRead { ref path, .. } if *path == missing));
    }

    #[test]
    fn load_names_file_in_parse_error() {
        use assert_fs::prelude::*;

        let dir = assert_fs::TempDir::new().unwrap();
        let manifest = dir.child("icons.json");
        manifest.write_str("not json").unwrap();

        let err = load_manifest(manifest.path()).unwrap_err();
        assert!(matches!(err, ExtractError::ManifestParse { .. }));
        assert!(err.to_string().contains("icons.json"));
        // The serde detail lives in the source chain only.
        assert!(!err.to_string().contains("expected ident"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("expected ident at line 1 column 2"));
    }
}
