//! Defaulting and coercion for stored blobs.
//!
//! Older blobs may miss newer fields, carry wrong types, or contain junk.
//! `sanitize` guarantees a fully-shaped [`ResumeDocument`] regardless:
//! every top-level key takes the stored value when present and correctly
//! typed, otherwise the default. It never fails: malformed input is a
//! recoverable condition, not an error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::document::{PersonalInfo, ResumeDocument, SectionKey, DEFAULT_SECTION_ORDER};

/// Produces a fully-defaulted document from a possibly-partial or
/// legacy-shaped stored value. A non-object input yields the default
/// document.
pub fn sanitize(raw: &Value) -> ResumeDocument {
    let mut doc = ResumeDocument::default();
    let Some(obj) = raw.as_object() else {
        return doc;
    };

    doc.personal_info = sanitize_personal_info(obj.get("personalInfo"));
    if let Some(s) = obj.get("summary").and_then(Value::as_str) {
        doc.summary = s.to_string();
    }

    doc.experience = coerce_entries(obj.get("experience"));
    doc.education = coerce_entries(obj.get("education"));
    doc.skills = coerce_entries(obj.get("skills"));
    doc.organizations = coerce_entries(obj.get("organizations"));
    doc.languages = coerce_entries(obj.get("languages"));
    doc.courses = coerce_entries(obj.get("courses"));
    doc.references = coerce_entries(obj.get("references"));
    doc.certifications = coerce_entries(obj.get("certifications"));

    if let Some(s) = obj.get("themeColor").and_then(Value::as_str) {
        if !s.is_empty() {
            doc.theme_color = s.to_string();
        }
    }
    if let Some(s) = obj.get("textColor").and_then(Value::as_str) {
        if !s.is_empty() {
            doc.text_color = s.to_string();
        }
    }
    if let Some(s) = obj.get("font").and_then(Value::as_str) {
        if !s.is_empty() {
            doc.font = s.to_string();
        }
    }

    // Unknown identifiers fall back to the enum defaults.
    doc.template = coerce_or_default(obj.get("template"));
    doc.text_align = coerce_or_default(obj.get("textAlign"));
    doc.language = coerce_or_default(obj.get("language"));
    doc.photo_shape = coerce_or_default(obj.get("photoShape"));
    doc.photo_size = coerce_or_default(obj.get("photoSize"));

    if let Some(b) = obj.get("showPhoto").and_then(Value::as_bool) {
        doc.show_photo = b;
    }
    if let Some(b) = obj.get("photoOutline").and_then(Value::as_bool) {
        doc.photo_outline = b;
    }

    doc.section_order = sanitize_section_order(obj.get("sectionOrder"));
    doc
}

/// Stored contact fields merge over defaults; a wrong-typed field is
/// treated as absent without discarding its siblings.
fn sanitize_personal_info(raw: Option<&Value>) -> PersonalInfo {
    let Some(Value::Object(fields)) = raw else {
        return PersonalInfo::default();
    };
    let strings: serde_json::Map<String, Value> = fields
        .iter()
        .filter(|(_, v)| v.is_string())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    serde_json::from_value(Value::Object(strings)).unwrap_or_default()
}

/// Coerces a stored section to a vector of typed entries. Non-array
/// values become empty; elements that fail to deserialize are skipped.
fn coerce_entries<T: DeserializeOwned>(raw: Option<&Value>) -> Vec<T> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Dropping malformed section entry: {err}");
                None
            }
        })
        .collect()
}

fn coerce_or_default<T: DeserializeOwned + Default>(raw: Option<&Value>) -> T {
    raw.and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

/// The canonical order replaces a stored order that is missing, not an
/// array, or empty. Unknown keys inside a stored order are dropped; a key
/// missing from a custom order simply never renders.
fn sanitize_section_order(raw: Option<&Value>) -> Vec<SectionKey> {
    let Some(Value::Array(items)) = raw else {
        return DEFAULT_SECTION_ORDER.to_vec();
    };
    if items.is_empty() {
        return DEFAULT_SECTION_ORDER.to_vec();
    }
    items
        .iter()
        .filter_map(|item| serde_json::from_value::<SectionKey>(item.clone()).ok())
        .collect()
}
