//! Typed partial updates against a [`ResumeDocument`].
//!
//! A patch carries all-optional fields; applying it replaces each supplied
//! field wholesale. This is a shallow merge: `personal_info` is swapped as
//! a whole record, so callers editing a single contact field must merge it
//! over the current value before building the patch.

use serde::{Deserialize, Serialize};

use crate::document::{
    CertificationEntry, CourseEntry, EducationEntry, ExperienceEntry, Language, LanguageEntry,
    OrganizationEntry, PersonalInfo, PhotoShape, PhotoSize, ReferenceEntry, ResumeDocument,
    SectionKey, SkillEntry, TemplateId, TextAlign,
};

/// All-optional top-level field replacement set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumePatch {
    pub personal_info: Option<PersonalInfo>,
    pub summary: Option<String>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<SkillEntry>>,
    pub organizations: Option<Vec<OrganizationEntry>>,
    pub languages: Option<Vec<LanguageEntry>>,
    pub courses: Option<Vec<CourseEntry>>,
    pub references: Option<Vec<ReferenceEntry>>,
    pub certifications: Option<Vec<CertificationEntry>>,
    pub theme_color: Option<String>,
    pub text_color: Option<String>,
    pub template: Option<TemplateId>,
    pub font: Option<String>,
    pub text_align: Option<TextAlign>,
    pub language: Option<Language>,
    pub section_order: Option<Vec<SectionKey>>,
    pub show_photo: Option<bool>,
    pub photo_shape: Option<PhotoShape>,
    pub photo_size: Option<PhotoSize>,
    pub photo_outline: Option<bool>,
}

impl ResumePatch {
    /// Returns a new document equal to `current` with each supplied field
    /// replaced. Unsupplied fields are untouched.
    pub fn apply(self, current: &ResumeDocument) -> ResumeDocument {
        let mut doc = current.clone();
        if let Some(v) = self.personal_info {
            doc.personal_info = v;
        }
        if let Some(v) = self.summary {
            doc.summary = v;
        }
        if let Some(v) = self.experience {
            doc.experience = v;
        }
        if let Some(v) = self.education {
            doc.education = v;
        }
        if let Some(v) = self.skills {
            doc.skills = v;
        }
        if let Some(v) = self.organizations {
            doc.organizations = v;
        }
        if let Some(v) = self.languages {
            doc.languages = v;
        }
        if let Some(v) = self.courses {
            doc.courses = v;
        }
        if let Some(v) = self.references {
            doc.references = v;
        }
        if let Some(v) = self.certifications {
            doc.certifications = v;
        }
        if let Some(v) = self.theme_color {
            doc.theme_color = v;
        }
        if let Some(v) = self.text_color {
            doc.text_color = v;
        }
        if let Some(v) = self.template {
            doc.template = v;
        }
        if let Some(v) = self.font {
            doc.font = v;
        }
        if let Some(v) = self.text_align {
            doc.text_align = v;
        }
        if let Some(v) = self.language {
            doc.language = v;
        }
        if let Some(v) = self.section_order {
            doc.section_order = v;
        }
        if let Some(v) = self.show_photo {
            doc.show_photo = v;
        }
        if let Some(v) = self.photo_shape {
            doc.photo_shape = v;
        }
        if let Some(v) = self.photo_size {
            doc.photo_size = v;
        }
        if let Some(v) = self.photo_outline {
            doc.photo_outline = v;
        }
        doc
    }
}

/// Full replacement payload for one repeatable section. The variant names
/// the section, so the key and the entry type cannot disagree.
#[derive(Debug, Clone)]
pub enum SectionData {
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<SkillEntry>),
    Organizations(Vec<OrganizationEntry>),
    Languages(Vec<LanguageEntry>),
    Courses(Vec<CourseEntry>),
    References(Vec<ReferenceEntry>),
    Certifications(Vec<CertificationEntry>),
}

impl SectionData {
    pub fn key(&self) -> SectionKey {
        match self {
            SectionData::Experience(_) => SectionKey::Experience,
            SectionData::Education(_) => SectionKey::Education,
            SectionData::Skills(_) => SectionKey::Skills,
            SectionData::Organizations(_) => SectionKey::Organizations,
            SectionData::Languages(_) => SectionKey::Languages,
            SectionData::Courses(_) => SectionKey::Courses,
            SectionData::References(_) => SectionKey::References,
            SectionData::Certifications(_) => SectionKey::Certifications,
        }
    }

    pub(crate) fn into_patch(self) -> ResumePatch {
        let mut patch = ResumePatch::default();
        match self {
            SectionData::Experience(v) => patch.experience = Some(v),
            SectionData::Education(v) => patch.education = Some(v),
            SectionData::Skills(v) => patch.skills = Some(v),
            SectionData::Organizations(v) => patch.organizations = Some(v),
            SectionData::Languages(v) => patch.languages = Some(v),
            SectionData::Courses(v) => patch.courses = Some(v),
            SectionData::References(v) => patch.references = Some(v),
            SectionData::Certifications(v) => patch.certifications = Some(v),
        }
        patch
    }
}
