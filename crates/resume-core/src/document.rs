//! The résumé document aggregate and its defaults.
//!
//! Every field carries a documented default so consumers never observe a
//! missing top-level field: absent sections read as empty vectors, absent
//! settings read as the defaults below. Serde names stay camelCase so
//! persisted blobs remain byte-compatible with the historical JSON shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default theme accent color.
pub const DEFAULT_THEME_COLOR: &str = "#007BFF";
/// Default body text color.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Default font family.
pub const DEFAULT_FONT: &str = "Times New Roman";

/// Canonical section order used when a stored order is missing or empty.
pub const DEFAULT_SECTION_ORDER: [SectionKey; 8] = [
    SectionKey::Education,
    SectionKey::Experience,
    SectionKey::Organizations,
    SectionKey::Certifications,
    SectionKey::Languages,
    SectionKey::Skills,
    SectionKey::Courses,
    SectionKey::References,
];

/// Identifier of one of the repeatable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Education,
    Experience,
    Organizations,
    Certifications,
    Languages,
    Skills,
    Courses,
    References,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::Organizations => "organizations",
            SectionKey::Certifications => "certifications",
            SectionKey::Languages => "languages",
            SectionKey::Skills => "skills",
            SectionKey::Courses => "courses",
            SectionKey::References => "references",
        }
    }
}

/// One of the six known visual templates. Unknown stored values fall back
/// to `Modern` during sanitize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Professional,
    Creative,
    Minimal,
    Executive,
    Tech,
}

/// Output language for section headings and date labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoShape {
    #[default]
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PhotoSize {
    /// Rendered edge length in pixels.
    pub fn px(&self) -> u32 {
        match self {
            PhotoSize::Small => 56,
            PhotoSize::Medium => 80,
            PhotoSize::Large => 112,
        }
    }
}

/// Contact and identity fields. Empty string means "not provided";
/// renderers skip empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub driving_license: String,
    pub nationality: String,
    pub place_of_birth: String,
    pub date_of_birth: String,
    pub linkedin: String,
    pub website: String,
    /// Photo as a `data:` URI, or empty when no photo is set.
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub job_title: String,
    pub employer: String,
    pub start_date: String,
    pub end_date: String,
    pub city: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub city: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    /// Free-form proficiency label, e.g. "Beginner", "Expert".
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationEntry {
    pub id: String,
    pub role: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub city: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    pub id: String,
    pub language: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseEntry {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub id: String,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

/// The single aggregate record holding all user-entered résumé content
/// and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub organizations: Vec<OrganizationEntry>,
    pub languages: Vec<LanguageEntry>,
    pub courses: Vec<CourseEntry>,
    pub references: Vec<ReferenceEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub theme_color: String,
    pub text_color: String,
    pub template: TemplateId,
    pub font: String,
    pub text_align: TextAlign,
    pub language: Language,
    pub section_order: Vec<SectionKey>,
    pub show_photo: bool,
    pub photo_shape: PhotoShape,
    pub photo_size: PhotoSize,
    pub photo_outline: bool,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            organizations: Vec::new(),
            languages: Vec::new(),
            courses: Vec::new(),
            references: Vec::new(),
            certifications: Vec::new(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            template: TemplateId::default(),
            font: DEFAULT_FONT.to_string(),
            text_align: TextAlign::default(),
            language: Language::default(),
            section_order: DEFAULT_SECTION_ORDER.to_vec(),
            show_photo: true,
            photo_shape: PhotoShape::default(),
            photo_size: PhotoSize::default(),
            photo_outline: false,
        }
    }
}

/// Generates a fresh opaque entry id. Ids are unique within a section for
/// the lifetime of the entry and never reused after deletion.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_fully_shaped() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.template, TemplateId::Modern);
        assert_eq!(doc.theme_color, "#007BFF");
        assert_eq!(doc.text_color, "#000000");
        assert_eq!(doc.font, "Times New Roman");
        assert_eq!(doc.section_order, DEFAULT_SECTION_ORDER.to_vec());
        assert!(doc.show_photo);
        assert!(!doc.photo_outline);
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn test_serde_names_are_camel_case() {
        let doc = ResumeDocument::default();
        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("personalInfo"));
        assert!(obj.contains_key("themeColor"));
        assert!(obj.contains_key("sectionOrder"));
        assert!(obj.contains_key("showPhoto"));
        assert_eq!(value["template"], "modern");
        assert_eq!(value["language"], "en");
        assert_eq!(value["photoShape"], "circle");
        assert_eq!(value["photoSize"], "medium");
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = new_entry_id();
        let b = new_entry_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_photo_size_px() {
        assert_eq!(PhotoSize::Small.px(), 56);
        assert_eq!(PhotoSize::Medium.px(), 80);
        assert_eq!(PhotoSize::Large.px(), 112);
    }
}
