//! Language catalog behind the language picker and `/languages.json`.
//!
//! A catalog is a list of named groups. Every language has a canonical id
//! plus alternate ids; lookups accept either and fall back to the `Unknown`
//! language instead of failing.

use crate::constants::UNKNOWN_LANGUAGE_ID;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

const BUILTIN_CATALOG: &str = include_str!("../data/languages.json");

/// One selectable language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alt_ids: Vec<String>,
}

impl Language {
    /// The fallback for names the catalog does not know.
    pub fn unknown() -> &'static Language {
        static UNKNOWN: OnceLock<Language> = OnceLock::new();
        UNKNOWN.get_or_init(|| Language {
            name: "Unknown".to_string(),
            id: UNKNOWN_LANGUAGE_ID.to_string(),
            alt_ids: Vec::new(),
        })
    }
}

/// A titled group of languages, sorted by display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageGroup {
    pub name: String,
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// Loaded catalog with an id/alternate-id index.
#[derive(Clone, Debug)]
pub struct LanguageCatalog {
    groups: Vec<LanguageGroup>,
    index: HashMap<String, (usize, usize)>,
}

impl LanguageCatalog {
    /// Build a catalog from groups, sorting each group by name.
    ///
    /// # Errors
    /// Returns [`AppError::Internal`] when an id or alternate id is claimed
    /// by two languages.
    pub fn from_groups(mut groups: Vec<LanguageGroup>) -> Result<Self, AppError> {
        for group in &mut groups {
            group.languages.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut index = HashMap::new();
        for (group_idx, group) in groups.iter().enumerate() {
            for (lang_idx, language) in group.languages.iter().enumerate() {
                let names = std::iter::once(&language.id).chain(language.alt_ids.iter());
                for name in names {
                    if index.insert(name.clone(), (group_idx, lang_idx)).is_some() {
                        return Err(AppError::Internal(format!(
                            "Language id '{}' is defined more than once",
                            name
                        )));
                    }
                }
            }
        }

        Ok(Self { groups, index })
    }

    /// Parse a catalog from its JSON form.
    ///
    /// # Errors
    /// Returns [`AppError::Serialization`] for malformed JSON and the
    /// [`Self::from_groups`] errors for inconsistent content.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let groups: Vec<LanguageGroup> = serde_json::from_str(json)?;
        Self::from_groups(groups)
    }

    /// Read a catalog file.
    ///
    /// # Errors
    /// Returns [`AppError::Io`] when the file cannot be read, plus the
    /// [`Self::from_json`] errors.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded {} languages in {} groups from {}",
            catalog.len(),
            catalog.groups.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    /// Only fails if the embedded catalog itself is inconsistent.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load `path` when given, otherwise the built-in catalog.
    ///
    /// # Errors
    /// Propagates [`Self::from_path`] failures; a configured file that cannot
    /// be loaded is not silently replaced.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn groups(&self) -> &[LanguageGroup] {
        &self.groups
    }

    /// Number of languages (not counting alternate ids).
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.languages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a language by id or alternate id.
    pub fn get(&self, name: &str) -> Option<&Language> {
        let (group_idx, lang_idx) = *self.index.get(name.trim())?;
        self.groups.get(group_idx)?.languages.get(lang_idx)
    }

    /// [`Self::get`], falling back to [`Language::unknown`].
    pub fn resolve(&self, name: &str) -> &Language {
        match self.get(name) {
            Some(language) => language,
            None => {
                warn!("Unknown language '{}'; using {}", name, UNKNOWN_LANGUAGE_ID);
                Language::unknown()
            }
        }
    }

    /// Serialized groups as served to the language picker.
    ///
    /// # Errors
    /// Returns [`AppError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.groups)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_loads_and_sorts_groups() {
        let catalog = LanguageCatalog::builtin().expect("builtin");
        assert!(!catalog.is_empty());
        for group in catalog.groups() {
            let names: Vec<&str> = group.languages.iter().map(|l| l.name.as_str()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted, "group: {}", group.name);
        }
    }

    #[test]
    fn lookup_accepts_ids_and_alternate_ids() {
        let catalog = LanguageCatalog::builtin().expect("builtin");
        assert_eq!(catalog.get("rust").map(|l| l.name.as_str()), Some("Rust"));
        assert_eq!(catalog.get("rs").map(|l| l.id.as_str()), Some("rust"));
        assert_eq!(catalog.get(" py ").map(|l| l.id.as_str()), Some("python"));
        assert!(catalog.get("cobol").is_none());
    }

    #[test]
    fn resolve_falls_back_to_unknown() {
        let catalog = LanguageCatalog::builtin().expect("builtin");
        let language = catalog.resolve("brainfunk");
        assert_eq!(language.id, UNKNOWN_LANGUAGE_ID);
        assert_eq!(language.name, "Unknown");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"name": "A", "languages": [{"name": "One", "id": "one"}]},
            {"name": "B", "languages": [{"name": "Two", "id": "two", "alt_ids": ["one"]}]}
        ]"#;
        let err = LanguageCatalog::from_json(json).expect_err("duplicate");
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = LanguageCatalog::from_json("{not json").expect_err("malformed");
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn json_output_omits_empty_alternate_ids() {
        let catalog = LanguageCatalog::from_json(
            r#"[{"name": "G", "languages": [{"name": "Zed", "id": "zed"}, {"name": "Alpha", "id": "alpha", "alt_ids": ["a"]}]}]"#,
        )
        .expect("catalog");
        let value: serde_json::Value =
            serde_json::from_str(&catalog.to_json().expect("json")).expect("parse");
        assert_eq!(
            value,
            serde_json::json!([{
                "name": "G",
                "languages": [
                    {"name": "Alpha", "id": "alpha", "alt_ids": ["a"]},
                    {"name": "Zed", "id": "zed"}
                ]
            }])
        );
    }

    #[test]
    fn load_reads_configured_file_or_reports_io_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"name": "Only", "languages": [{{"name": "Lua", "id": "lua"}}]}}]"#
        )
        .expect("write catalog");

        let catalog = LanguageCatalog::load(Some(file.path())).expect("load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("lua").name, "Lua");

        let missing = file.path().with_extension("missing");
        let err = LanguageCatalog::load(Some(&missing)).expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)));
    }
}
