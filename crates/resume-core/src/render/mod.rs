//! Template renderers: pure mappings from a document to an HTML string.
//!
//! Each of the six templates builds a full A4-style page with inline
//! styles only, so the output is host-agnostic. Renderers are
//! deterministic, tolerate every field being empty, and never fail: bad
//! rich text degrades through the markdown fallback, and empty sections
//! simply do not appear.

mod creative;
mod executive;
mod minimal;
mod modern;
mod parts;
mod professional;
mod tech;

use crate::document::{Language, ResumeDocument, SectionKey, TemplateId};

/// Renders `doc` with its selected template.
pub fn render(doc: &ResumeDocument) -> String {
    match doc.template {
        TemplateId::Modern => modern::render(doc),
        TemplateId::Professional => professional::render(doc),
        TemplateId::Creative => creative::render(doc),
        TemplateId::Minimal => minimal::render(doc),
        TemplateId::Executive => executive::render(doc),
        TemplateId::Tech => tech::render(doc),
    }
}

/// Localized heading for a repeatable section. Templates apply their own
/// casing via CSS.
pub(crate) fn heading(key: SectionKey, lang: Language) -> &'static str {
    match (key, lang) {
        (SectionKey::Experience, Language::En) => "Experience",
        (SectionKey::Experience, Language::Id) => "Pengalaman",
        (SectionKey::Education, Language::En) => "Education",
        (SectionKey::Education, Language::Id) => "Pendidikan",
        (SectionKey::Skills, Language::En) => "Skills",
        (SectionKey::Skills, Language::Id) => "Keahlian",
        (SectionKey::Organizations, Language::En) => "Organizations",
        (SectionKey::Organizations, Language::Id) => "Organisasi",
        (SectionKey::Languages, Language::En) => "Languages",
        (SectionKey::Languages, Language::Id) => "Bahasa",
        (SectionKey::Courses, Language::En) => "Courses",
        (SectionKey::Courses, Language::Id) => "Kursus",
        (SectionKey::References, Language::En) => "References",
        (SectionKey::References, Language::Id) => "Referensi",
        (SectionKey::Certifications, Language::En) => "Certifications",
        (SectionKey::Certifications, Language::Id) => "Sertifikasi",
    }
}

/// Localized heading for the free-text summary block.
pub(crate) fn profile_heading(lang: Language) -> &'static str {
    match lang {
        Language::En => "Profile",
        Language::Id => "Profil",
    }
}

/// Localized heading for the contact block.
pub(crate) fn contact_heading(lang: Language) -> &'static str {
    match lang {
        Language::En => "Contact",
        Language::Id => "Kontak",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        EducationEntry, ExperienceEntry, LanguageEntry, SkillEntry, TemplateId,
    };

    fn populated_doc() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.first_name = "Ada".to_string();
        doc.personal_info.last_name = "Lovelace".to_string();
        doc.personal_info.job_title = "Analyst <Engine>".to_string();
        doc.personal_info.email = "ada@example.com".to_string();
        doc.personal_info.city = "London".to_string();
        doc.summary = "Pioneer of **computing**.".to_string();
        doc.experience.push(ExperienceEntry {
            id: "x1".to_string(),
            job_title: "Mathematician".to_string(),
            employer: "Analytical Engine & Co".to_string(),
            start_date: "1842-01".to_string(),
            end_date: String::new(),
            city: "London".to_string(),
            description: "- wrote the *first* program".to_string(),
        });
        doc.education.push(EducationEntry {
            id: "e1".to_string(),
            school: "Home tutoring".to_string(),
            degree: "Mathematics".to_string(),
            start_date: "1830-06".to_string(),
            end_date: "1835-01".to_string(),
            ..Default::default()
        });
        doc.skills.push(SkillEntry {
            id: "s1".to_string(),
            name: "Mathematics".to_string(),
            level: "Expert".to_string(),
        });
        doc.languages.push(LanguageEntry {
            id: "l1".to_string(),
            language: "French".to_string(),
            level: "Fluent".to_string(),
        });
        doc
    }

    const ALL_TEMPLATES: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Professional,
        TemplateId::Creative,
        TemplateId::Minimal,
        TemplateId::Executive,
        TemplateId::Tech,
    ];

    #[test]
    fn test_every_template_renders_empty_document() {
        for template in ALL_TEMPLATES {
            let mut doc = ResumeDocument::default();
            doc.template = template;
            let html = render(&doc);
            assert!(!html.is_empty(), "{template:?} produced no output");
            // Empty sections render no headings.
            assert!(!html.contains("Experience"), "{template:?}");
        }
    }

    #[test]
    fn test_every_template_renders_populated_document() {
        for template in ALL_TEMPLATES {
            let mut doc = populated_doc();
            doc.template = template;
            let html = render(&doc);
            assert!(html.contains("Ada"), "{template:?}");
            assert!(html.contains("Lovelace"), "{template:?}");
            assert!(html.contains("Mathematician"), "{template:?}");
            assert!(html.contains("Jan 1842"), "{template:?}");
            // User text is escaped, never raw.
            assert!(!html.contains("<Engine>"), "{template:?}");
            assert!(html.contains("&lt;Engine&gt;"), "{template:?}");
            // Markdown made it through the restricted renderer.
            assert!(html.contains("<strong>computing</strong>"), "{template:?}");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = populated_doc();
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_section_order_is_honoured() {
        let mut doc = populated_doc();
        doc.template = TemplateId::Minimal;
        doc.section_order = vec![SectionKey::Experience, SectionKey::Education];
        let html = render(&doc);
        let exp = html.find("Experience").unwrap();
        let edu = html.find("Education").unwrap();
        assert!(exp < edu);

        doc.section_order = vec![SectionKey::Education, SectionKey::Experience];
        let html = render(&doc);
        let exp = html.find("Experience").unwrap();
        let edu = html.find("Education").unwrap();
        assert!(edu < exp);
    }

    #[test]
    fn test_sections_missing_from_order_are_omitted() {
        let mut doc = populated_doc();
        doc.template = TemplateId::Minimal;
        doc.section_order = vec![SectionKey::Experience];
        let html = render(&doc);
        assert!(html.contains("Mathematician"));
        assert!(!html.contains("Home tutoring"));
    }

    #[test]
    fn test_localized_headings() {
        let mut doc = populated_doc();
        doc.language = Language::Id;
        doc.template = TemplateId::Professional;
        let html = render(&doc);
        assert!(html.contains("Pengalaman"));
        assert!(html.contains("Pendidikan"));
        assert!(html.contains("Sekarang"));
        assert!(!html.contains("Present"));
    }

    #[test]
    fn test_style_settings_are_applied() {
        let mut doc = populated_doc();
        doc.theme_color = "#AB12CD".to_string();
        doc.font = "Georgia".to_string();
        for template in ALL_TEMPLATES {
            doc.template = template;
            let html = render(&doc);
            assert!(html.contains("#AB12CD"), "{template:?}");
            assert!(html.contains("Georgia"), "{template:?}");
        }
    }

    #[test]
    fn test_photo_toggle() {
        let mut doc = populated_doc();
        doc.personal_info.photo_url = "data:image/png;base64,aGVsbG8=".to_string();
        doc.template = TemplateId::Creative;

        doc.show_photo = true;
        assert!(render(&doc).contains("<img"));

        doc.show_photo = false;
        assert!(!render(&doc).contains("<img"));
    }
}
