//! Validation rules for module metadata.
//!
//! Two concerns live here:
//!
//! - **Field validators**: pure checks of a single field value. The same
//!   functions back interactive re-prompting and non-interactive update
//!   rejection, so the two paths cannot drift apart.
//! - **Allowed-key policy**: which field names may legally appear in a
//!   partial update for a given module type. Identity fields (`url`,
//!   `type`, `version`) are never updatable, and the display field is
//!   spelled `title` for content but `name` for profiles.
//!
//! Validators return `Err(message)` with a user-presentable message;
//! callers decide how to wrap it.

use modcommons_types::{FieldValue, ModuleType, MAX_TITLE_LEN};

/// Keys that may appear in a `set` payload for a content module.
pub const CONTENT_KEYS: &[&str] = &["title", "description", "main", "subtype", "parents"];

/// Keys that may appear in a `set` payload for a profile module.
pub const PROFILE_KEYS: &[&str] = &["name", "description", "main", "follows"];

/// The ordered set of field names that may legally be changed on a
/// module of the given type.
pub fn allowed_keys(module_type: ModuleType) -> &'static [&'static str] {
    match module_type {
        ModuleType::Content => CONTENT_KEYS,
        ModuleType::Profile => PROFILE_KEYS,
    }
}

/// Validate a content title.
pub fn validate_title(value: &str) -> Result<(), String> {
    validate_display_field("Title", value)
}

/// Validate a profile name.
pub fn validate_name(value: &str) -> Result<(), String> {
    validate_display_field("Name", value)
}

fn validate_display_field(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} may not be empty", label));
    }
    if value.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "{} may not exceed {} characters",
            label, MAX_TITLE_LEN
        ));
    }
    Ok(())
}

/// Validate a field value against its registered validator, if any.
///
/// Keys without a validator (descriptions, key lists, ...) always pass.
pub fn validate_field(key: &str, value: &FieldValue) -> Result<(), String> {
    match (key, value) {
        ("title", FieldValue::Text(s)) => validate_title(s),
        ("name", FieldValue::Text(s)) => validate_name(s),
        ("title", FieldValue::List(_)) => Err("Title must be text".to_string()),
        ("name", FieldValue::List(_)) => Err("Name must be text".to_string()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_keys_exclude_identity_fields() {
        for module_type in [ModuleType::Content, ModuleType::Profile] {
            let keys = allowed_keys(module_type);
            assert!(!keys.contains(&"url"));
            assert!(!keys.contains(&"type"));
            assert!(!keys.contains(&"version"));
        }
    }

    #[test]
    fn test_display_field_is_renamed_per_type() {
        let content = allowed_keys(ModuleType::Content);
        assert!(content.contains(&"title"));
        assert!(!content.contains(&"name"));

        let profile = allowed_keys(ModuleType::Profile);
        assert!(profile.contains(&"name"));
        assert!(!profile.contains(&"title"));
    }

    #[test]
    fn test_title_rules() {
        assert!(validate_title("A result").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_description_unconstrained() {
        assert!(validate_field("description", &FieldValue::Text("".into())).is_ok());
        assert!(validate_field("description", &FieldValue::Text("d".into())).is_ok());
    }

    #[test]
    fn test_validate_field_dispatch() {
        assert!(validate_field("title", &FieldValue::Text("".into())).is_err());
        assert!(validate_field("name", &FieldValue::Text("".into())).is_err());
        assert!(validate_field("name", &FieldValue::Text("Jo".into())).is_ok());
        assert!(validate_field("title", &FieldValue::List(vec![])).is_err());
        // no validator registered for list fields
        assert!(validate_field("parents", &FieldValue::List(vec![])).is_ok());
    }
}
