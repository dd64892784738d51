//! Module records, drafts and field values.

use serde::{Deserialize, Serialize};

use crate::constants::LICENSE_URL;

/// The two kinds of modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// A content module (a piece of work).
    Content,
    /// A profile module (a person).
    Profile,
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content => write!(f, "content"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

impl std::str::FromStr for ModuleType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "profile" => Ok(Self::Profile),
            other => Err(crate::Error::user(format!(
                "Unknown module type \"{}\", expected content or profile",
                other
            ))),
        }
    }
}

/// A single metadata field value.
///
/// Records hold two shapes of field: text (`title`, `description`, ...)
/// and ordered key lists (`authors`, `parents`, ...). The derived
/// `PartialEq` is the one structural equality used everywhere a field is
/// compared against its stored counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A text field.
    Text(String),
    /// An ordered list of module keys, optionally versioned.
    List(Vec<String>),
}

impl FieldValue {
    /// Borrow the text form, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// True for `""` and `[]`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(l) => l.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

/// A module record as persisted by the SDK.
///
/// Both module types share one canonical shape; the `title` slot holds a
/// content title or a profile name. The external `name` spelling for
/// profiles is applied by the metadata gateway, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Immutable module key, 64 hex characters.
    pub url: String,
    /// Module type.
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Title (content) or name (profile).
    pub title: String,
    /// Free-form description, may be empty.
    #[serde(default)]
    pub description: String,
    /// Content subtype id, empty for profiles.
    #[serde(default)]
    pub subtype: String,
    /// Relative path to the primary file, may be empty.
    #[serde(default)]
    pub main: String,
    /// License url.
    #[serde(default)]
    pub license: String,
    /// Profile keys of the authors (content only).
    #[serde(default)]
    pub authors: Vec<String>,
    /// Keys of parent modules, optionally versioned (content only).
    #[serde(default)]
    pub parents: Vec<String>,
    /// Keys of followed profiles, optionally versioned (profile only).
    #[serde(default)]
    pub follows: Vec<String>,
    /// Versioned keys of published content (profile only).
    #[serde(default)]
    pub contents: Vec<String>,
    /// Monotonic version, bumped by the SDK on every successful mutation.
    pub version: u64,
    /// Whether the signing key is held locally.
    #[serde(default)]
    pub writable: bool,
}

impl ModuleRecord {
    /// True if this is a content module.
    pub fn is_content(&self) -> bool {
        self.module_type == ModuleType::Content
    }

    /// True if this is a profile module.
    pub fn is_profile(&self) -> bool {
        self.module_type == ModuleType::Profile
    }

    /// Read a field by its canonical (storage) key.
    ///
    /// Identity fields (`url`, `type`, `version`) and unknown keys
    /// return `None`.
    pub fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "subtype" => Some(FieldValue::Text(self.subtype.clone())),
            "main" => Some(FieldValue::Text(self.main.clone())),
            "authors" => Some(FieldValue::List(self.authors.clone())),
            "parents" => Some(FieldValue::List(self.parents.clone())),
            "follows" => Some(FieldValue::List(self.follows.clone())),
            "contents" => Some(FieldValue::List(self.contents.clone())),
            _ => None,
        }
    }

    /// Write a field by its canonical key. Returns `false` for unknown
    /// keys or a value of the wrong shape.
    pub fn apply(&mut self, key: &str, value: FieldValue) -> bool {
        match (key, value) {
            ("title", FieldValue::Text(v)) => self.title = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("subtype", FieldValue::Text(v)) => self.subtype = v,
            ("main", FieldValue::Text(v)) => self.main = v,
            ("authors", FieldValue::List(v)) => self.authors = v,
            ("parents", FieldValue::List(v)) => self.parents = v,
            ("follows", FieldValue::List(v)) => self.follows = v,
            ("contents", FieldValue::List(v)) => self.contents = v,
            _ => return false,
        }
        true
    }
}

/// Partial record passed to the SDK's `init`.
#[derive(Debug, Clone)]
pub struct ModuleDraft {
    /// Module type.
    pub module_type: ModuleType,
    /// Title (content) or name (profile).
    pub title: String,
    /// Description, may be empty.
    pub description: String,
    /// Content subtype id.
    pub subtype: String,
    /// Relative path to the primary file.
    pub main: String,
    /// Profile keys of the authors.
    pub authors: Vec<String>,
}

impl ModuleDraft {
    /// Create an empty draft of the given type.
    pub fn new(module_type: ModuleType) -> Self {
        Self {
            module_type,
            title: String::new(),
            description: String::new(),
            subtype: String::new(),
            main: String::new(),
            authors: Vec::new(),
        }
    }

    /// Set the title (or profile name).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the content subtype.
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = subtype.into();
        self
    }

    /// Set the main file path.
    pub fn with_main(mut self, main: impl Into<String>) -> Self {
        self.main = main.into();
        self
    }

    /// Set the author list.
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Materialize the draft into a full record. Used by SDK
    /// implementations; the version starts at 1.
    pub fn into_record(self, url: String) -> ModuleRecord {
        ModuleRecord {
            url,
            module_type: self.module_type,
            title: self.title,
            description: self.description,
            subtype: self.subtype,
            main: self.main,
            license: LICENSE_URL.to_string(),
            authors: self.authors,
            parents: Vec::new(),
            follows: Vec::new(),
            contents: Vec::new(),
            version: 1,
            writable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ModuleRecord {
        ModuleDraft::new(ModuleType::Content)
            .with_title("t")
            .with_description("d")
            .into_record("ab".repeat(32))
    }

    #[test]
    fn test_module_type_roundtrip() {
        assert_eq!("content".parse::<ModuleType>().unwrap(), ModuleType::Content);
        assert_eq!("Profile".parse::<ModuleType>().unwrap(), ModuleType::Profile);
        assert!("paper".parse::<ModuleType>().is_err());
    }

    #[test]
    fn test_field_lookup() {
        let rec = record();
        assert_eq!(rec.field("title"), Some(FieldValue::Text("t".into())));
        assert_eq!(rec.field("parents"), Some(FieldValue::List(vec![])));
        assert_eq!(rec.field("url"), None);
        assert_eq!(rec.field("version"), None);
        assert_eq!(rec.field("beep"), None);
    }

    #[test]
    fn test_apply() {
        let mut rec = record();
        assert!(rec.apply("description", FieldValue::Text("x".into())));
        assert_eq!(rec.description, "x");
        assert!(rec.apply("parents", FieldValue::List(vec!["k".into()])));
        assert!(!rec.apply("title", FieldValue::List(vec![])));
        assert!(!rec.apply("version", FieldValue::Text("9".into())));
    }

    #[test]
    fn test_structural_equality() {
        let a = FieldValue::List(vec!["x".into(), "y".into()]);
        let b = FieldValue::List(vec!["x".into(), "y".into()]);
        let c = FieldValue::List(vec!["y".into(), "x".into()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, FieldValue::Text("x,y".into()));
    }

    #[test]
    fn test_record_serde_shape() {
        let rec = record();
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "content");
        assert_eq!(json["version"], 1);
        let back: ModuleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_draft_into_record_seeds_license() {
        let rec = record();
        assert_eq!(rec.license, LICENSE_URL);
        assert!(rec.writable);
        assert_eq!(rec.version, 1);
    }
}
