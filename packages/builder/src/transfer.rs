//! # Import / Export
//!
//! The export document is the save format for a page design:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "name": "My Website",
//!   "description": "",
//!   "sections": [ ... ],
//!   "createdAt": "2024-01-01T00:00:00.000Z",
//!   "updatedAt": "2024-01-01T00:00:00.000Z"
//! }
//! ```
//!
//! Import only insists on a `sections` array whose entries are sections.
//! Ids and orders are trusted as written.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::section::Section;
use crate::store::BuilderStore;

pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No website data to import")]
    Empty,

    #[error("Not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid website data format: missing sections")]
    MissingSections,

    #[error("Invalid website data format: sections is not an array")]
    SectionsNotArray,

    #[error("Invalid section at index {index}: {message}")]
    InvalidSection { index: usize, message: String },

    #[error("Invalid website data format: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("Not a JSON file: {}", .0.display())]
    NotJsonFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Please enter a name for your website")]
    EmptyName,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Snapshot of a page design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteExport {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub sections: Vec<Section>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

impl WebsiteExport {
    /// Fresh export, both timestamps set to now
    pub fn new(name: &str, description: &str, sections: Vec<Section>) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            version: EXPORT_VERSION.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            sections,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Export the store's page under a user-supplied name.
///
/// Name and description are trimmed; a blank name is rejected.
pub fn export_website(
    store: &BuilderStore,
    name: &str,
    description: &str,
) -> Result<WebsiteExport, ExportError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExportError::EmptyName);
    }
    Ok(store.export_website(name, description.trim()))
}

pub fn to_json_pretty(document: &WebsiteExport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Download file name for an export, e.g. `my-site-website.json`
pub fn export_file_name(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{}-website.json", slug)
}

/// Write the document as pretty JSON into `dir`, returning the file path
pub fn write_export(document: &WebsiteExport, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(&document.name));
    std::fs::write(&path, to_json_pretty(document)?)?;
    Ok(path)
}

/// Parse pasted text or file contents into an export document
pub fn parse_import(text: &str) -> Result<WebsiteExport, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }

    let value: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;

    let sections = value.get("sections").ok_or(ImportError::MissingSections)?;
    let entries = sections.as_array().ok_or(ImportError::SectionsNotArray)?;

    for (index, entry) in entries.iter().enumerate() {
        Section::deserialize(entry).map_err(|e| ImportError::InvalidSection {
            index,
            message: e.to_string(),
        })?;
    }

    serde_json::from_value(value).map_err(ImportError::InvalidDocument)
}

/// Load and parse an import file.
///
/// Files without a `.json` extension are rejected before reading.
pub async fn read_import_file(path: &Path) -> Result<WebsiteExport, ImportError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        return Err(ImportError::NotJsonFile(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_import(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_section;
    use crate::section::SectionType;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("My  Cool\tSite"), "my-cool-site-website.json");
        assert_eq!(export_file_name("landing"), "landing-website.json");
    }

    #[test]
    fn test_export_timestamps_equal() {
        let document = WebsiteExport::new("Site", "", vec![]);
        assert_eq!(document.version, EXPORT_VERSION);
        assert_eq!(document.created_at, document.updated_at);
        assert!(document.created_at.ends_with('Z'));
    }

    #[test]
    fn test_export_rejects_blank_name() {
        let store = BuilderStore::new();
        assert!(matches!(
            export_website(&store, "   ", "desc"),
            Err(ExportError::EmptyName)
        ));

        let document = export_website(&store, "  Site ", " desc ").unwrap();
        assert_eq!(document.name, "Site");
        assert_eq!(document.description, "desc");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(parse_import("  "), Err(ImportError::Empty)));
        assert!(matches!(parse_import("not json"), Err(ImportError::InvalidJson(_))));
        assert!(matches!(
            parse_import(r#"{"version":"1.0.0","name":"x"}"#),
            Err(ImportError::MissingSections)
        ));
        assert!(matches!(
            parse_import(r#"{"version":"1.0.0","name":"x","description":"","sections":"not-an-array"}"#),
            Err(ImportError::SectionsNotArray)
        ));
        assert!(matches!(
            parse_import(r#"{"sections":[{"id":"a","type":"sidebar","order":0,"isVisible":true,"props":{}}]}"#),
            Err(ImportError::InvalidSection { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_accepts_minimal_document() {
        let document = parse_import(r#"{"sections":[]}"#).unwrap();
        assert!(document.sections.is_empty());
        assert_eq!(document.name, "");
    }

    #[test]
    fn test_export_then_parse_preserves_sections() {
        let mut store = BuilderStore::new();
        store.add_section(default_section(SectionType::Header));
        store.add_section(default_section(SectionType::Features).hidden());

        let document = store.export_website("Site", "");
        let parsed = parse_import(&to_json_pretty(&document).unwrap()).unwrap();

        assert_eq!(parsed.sections, store.sections());
    }

    #[tokio::test]
    async fn test_read_import_file_requires_json_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.txt");
        std::fs::write(&path, r#"{"sections":[]}"#).unwrap();

        assert!(matches!(
            read_import_file(&path).await,
            Err(ImportError::NotJsonFile(_))
        ));
    }

    #[tokio::test]
    async fn test_write_then_read_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BuilderStore::new();
        store.add_section(default_section(SectionType::About));

        let document = export_website(&store, "My Site", "").unwrap();
        let path = write_export(&document, dir.path()).unwrap();
        assert!(path.ends_with("my-site-website.json"));

        let loaded = read_import_file(&path).await.unwrap();
        assert_eq!(loaded, document);
    }
}
