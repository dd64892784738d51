//! Pure transforms applied around SDK calls.

use serde_json::{json, Map, Value};

use modcommons_types::{link::present_url, FieldValue, ModuleRecord, ModuleType};

/// Map an external field key to its canonical storage key.
///
/// Only one asymmetry exists: a profile's `name` is stored as `title`.
pub fn import_key(module_type: ModuleType, key: &str) -> &str {
    if module_type == ModuleType::Profile && key == "name" {
        "title"
    } else {
        key
    }
}

/// Read a field of a record as the outside world sees it.
///
/// For profiles the display slot answers to `name` and not to `title`;
/// for content it is the other way around. Unknown and identity keys
/// return `None`, which makes them "changed" from any supplied value.
pub fn export_field(record: &ModuleRecord, key: &str) -> Option<FieldValue> {
    match (record.module_type, key) {
        (ModuleType::Profile, "name") => Some(FieldValue::Text(record.title.clone())),
        (ModuleType::Profile, "title") => None,
        (ModuleType::Content, "name") => None,
        _ => record.field(key),
    }
}

/// Export a full record as an ordered JSON map, renaming applied and
/// the key re-encoded for presentation.
pub fn export_record(record: &ModuleRecord) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("url".into(), json!(present_url(&record.url)));
    out.insert("type".into(), json!(record.module_type.to_string()));
    match record.module_type {
        ModuleType::Content => {
            out.insert("title".into(), json!(record.title));
            out.insert("description".into(), json!(record.description));
            out.insert("subtype".into(), json!(record.subtype));
            out.insert("main".into(), json!(record.main));
            out.insert("license".into(), json!(record.license));
            out.insert("authors".into(), json!(record.authors));
            out.insert("parents".into(), json!(record.parents));
        }
        ModuleType::Profile => {
            out.insert("name".into(), json!(record.title));
            out.insert("description".into(), json!(record.description));
            out.insert("main".into(), json!(record.main));
            out.insert("license".into(), json!(record.license));
            out.insert("follows".into(), json!(record.follows));
            out.insert("contents".into(), json!(record.contents));
        }
    }
    out.insert("version".into(), json!(record.version));
    out.insert("writable".into(), json!(record.writable));
    out
}
