//! Shared constants for module records.

/// Maximum length of a module title or profile name, in characters.
pub const MAX_TITLE_LEN: usize = 300;

/// Length of a module key in hex characters (32 bytes).
pub const KEY_HEX_LEN: usize = 64;

/// License every module is published under.
pub const LICENSE_URL: &str =
    "https://creativecommons.org/publicdomain/zero/1.0/legalcode";

/// Known content subtypes as `(id, label)` pairs, in menu order.
pub const SUBTYPES: &[(&str, &str)] = &[
    ("theory", "Theory"),
    ("study", "Empirical study"),
    ("review", "Literature review"),
    ("data", "Dataset"),
    ("software", "Software"),
    ("other", "Other"),
];

/// Look up the display label for a subtype id.
pub fn subtype_label(id: &str) -> Option<&'static str> {
    SUBTYPES
        .iter()
        .find(|(sid, _)| *sid == id)
        .map(|(_, label)| *label)
}
