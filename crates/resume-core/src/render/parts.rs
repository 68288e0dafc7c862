//! Shared building blocks for the template renderers.
//!
//! Every template styles its own scaffold and headings, but the inner
//! entry markup (title / subtitle / date line / rich description) is the
//! same shape everywhere, parameterized by a small style struct.

use crate::dates::format_range;
use crate::document::{Language, PersonalInfo, ResumeDocument, SectionKey, TextAlign};
use crate::markdown::{escape, to_html};

/// Per-template knobs applied to shared entry markup.
#[derive(Clone, Copy)]
pub(crate) struct EntryStyle<'a> {
    /// Accent color for subtitles and date lines.
    pub accent: &'a str,
    /// Body text color.
    pub text: &'a str,
    pub align: TextAlign,
    pub lang: Language,
}

impl<'a> EntryStyle<'a> {
    pub fn of(doc: &'a ResumeDocument) -> Self {
        EntryStyle {
            accent: &doc.theme_color,
            text: &doc.text_color,
            align: doc.text_align,
            lang: doc.language,
        }
    }
}

fn entry_block(
    title: &str,
    subtitle: &str,
    meta: &str,
    description: &str,
    style: EntryStyle<'_>,
) -> String {
    let mut out = String::from("<div style=\"margin-bottom:10px\">");
    if !title.is_empty() {
        out.push_str(&format!(
            "<div style=\"font-weight:600;font-size:13px;color:{}\">{}</div>",
            escape(style.text),
            escape(title)
        ));
    }
    if !subtitle.is_empty() {
        out.push_str(&format!(
            "<div style=\"font-size:12px;color:{}\">{}</div>",
            escape(style.accent),
            escape(subtitle)
        ));
    }
    if !meta.is_empty() {
        out.push_str(&format!(
            "<div style=\"font-size:11px;color:#6b7280\">{}</div>",
            escape(meta)
        ));
    }
    if !description.is_empty() {
        out.push_str(&format!(
            "<div style=\"font-size:12px;text-align:{};color:{}\">{}</div>",
            style.align.css(),
            escape(style.text),
            to_html(description)
        ));
    }
    out.push_str("</div>");
    out
}

fn join_nonempty<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|p: &&str| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// A label/value pair line, used by skill and language lists.
fn pair_line(name: &str, level: &str, style: EntryStyle<'_>) -> String {
    let mut out = format!(
        "<div style=\"display:flex;justify-content:space-between;font-size:12px;\
         margin-bottom:4px;color:{}\"><span>{}</span>",
        escape(style.text),
        escape(name)
    );
    if !level.is_empty() {
        out.push_str(&format!(
            "<span style=\"color:{}\">{}</span>",
            escape(style.accent),
            escape(level)
        ));
    }
    out.push_str("</div>");
    out
}

/// Renders the inner markup of one repeatable section, `None` when the
/// section has no entries.
pub(crate) fn section_items(
    doc: &ResumeDocument,
    key: SectionKey,
    style: EntryStyle<'_>,
) -> Option<String> {
    let lang = style.lang;
    let html = match key {
        SectionKey::Experience => {
            if doc.experience.is_empty() {
                return None;
            }
            doc.experience
                .iter()
                .map(|e| {
                    entry_block(
                        &e.job_title,
                        &join_nonempty(&[&e.employer, &e.city], ", "),
                        &format_range(&e.start_date, &e.end_date, lang),
                        &e.description,
                        style,
                    )
                })
                .collect()
        }
        SectionKey::Education => {
            if doc.education.is_empty() {
                return None;
            }
            doc.education
                .iter()
                .map(|e| {
                    entry_block(
                        &e.degree,
                        &join_nonempty(&[&e.school, &e.city], ", "),
                        &format_range(&e.start_date, &e.end_date, lang),
                        &e.description,
                        style,
                    )
                })
                .collect()
        }
        SectionKey::Organizations => {
            if doc.organizations.is_empty() {
                return None;
            }
            doc.organizations
                .iter()
                .map(|o| {
                    entry_block(
                        &o.role,
                        &join_nonempty(&[&o.organization, &o.city], ", "),
                        &format_range(&o.start_date, &o.end_date, lang),
                        &o.description,
                        style,
                    )
                })
                .collect()
        }
        SectionKey::Courses => {
            if doc.courses.is_empty() {
                return None;
            }
            doc.courses
                .iter()
                .map(|c| {
                    entry_block(
                        &c.name,
                        &c.institution,
                        &format_range(&c.start_date, &c.end_date, lang),
                        "",
                        style,
                    )
                })
                .collect()
        }
        SectionKey::Certifications => {
            if doc.certifications.is_empty() {
                return None;
            }
            doc.certifications
                .iter()
                .map(|c| {
                    entry_block(
                        &c.name,
                        &c.issuer,
                        &crate::dates::format_date(&c.date, lang),
                        &c.description,
                        style,
                    )
                })
                .collect()
        }
        SectionKey::Skills => {
            if doc.skills.is_empty() {
                return None;
            }
            doc.skills
                .iter()
                .map(|s| pair_line(&s.name, &s.level, style))
                .collect()
        }
        SectionKey::Languages => {
            if doc.languages.is_empty() {
                return None;
            }
            doc.languages
                .iter()
                .map(|l| pair_line(&l.language, &l.level, style))
                .collect()
        }
        SectionKey::References => {
            if doc.references.is_empty() {
                return None;
            }
            doc.references
                .iter()
                .map(|r| {
                    entry_block(
                        &r.name,
                        &r.company,
                        &join_nonempty(&[&r.email, &r.phone], " · "),
                        "",
                        style,
                    )
                })
                .collect()
        }
    };
    Some(html)
}

/// Skills as inline chips, for templates that prefer tags over rows.
pub(crate) fn skill_chips(doc: &ResumeDocument, style: EntryStyle<'_>) -> Option<String> {
    if doc.skills.is_empty() {
        return None;
    }
    let chips: String = doc
        .skills
        .iter()
        .map(|s| {
            format!(
                "<span style=\"display:inline-block;border:1px solid {accent};color:{accent};\
                 border-radius:3px;padding:2px 8px;margin:0 6px 6px 0;font-size:11px\">{}</span>",
                escape(&s.name),
                accent = escape(style.accent),
            )
        })
        .collect();
    Some(format!("<div>{chips}</div>"))
}

/// Display name, falling back to empty when nothing was entered.
pub(crate) fn full_name(info: &PersonalInfo) -> String {
    join_nonempty(&[&info.first_name, &info.last_name], " ")
}

/// Uppercase initials for templates that show a monogram placeholder.
pub(crate) fn initials(info: &PersonalInfo) -> String {
    [&info.first_name, &info.last_name]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Contact detail lines in a fixed order, empty fields skipped.
pub(crate) fn contact_lines(info: &PersonalInfo) -> Vec<String> {
    let address = join_nonempty(&[&info.address, &info.city, &info.country], ", ");
    [
        info.email.as_str(),
        info.phone.as_str(),
        address.as_str(),
        info.linkedin.as_str(),
        info.website.as_str(),
    ]
    .iter()
    .filter(|v| !v.is_empty())
    .map(|v| escape(v))
    .collect()
}

/// The photo `<img>` when a photo is set and enabled, shaped and sized
/// per the document settings.
pub(crate) fn photo_img(doc: &ResumeDocument, border_color: &str) -> Option<String> {
    if !doc.show_photo || doc.personal_info.photo_url.is_empty() {
        return None;
    }
    let px = doc.photo_size.px();
    let radius = match doc.photo_shape {
        crate::document::PhotoShape::Circle => "50%",
        crate::document::PhotoShape::Square => "4px",
    };
    let border = if doc.photo_outline {
        format!("border:3px solid {};", escape(border_color))
    } else {
        String::new()
    };
    Some(format!(
        "<img src=\"{}\" alt=\"\" style=\"width:{px}px;height:{px}px;border-radius:{radius};\
         object-fit:cover;{border}\">",
        escape(&doc.personal_info.photo_url)
    ))
}
