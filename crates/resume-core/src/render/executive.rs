//! Executive template: full-width band in the accent color across the
//! top, then a wide narrative column next to a narrow facts column.

use super::parts::{self, EntryStyle};
use super::{heading, profile_heading};
use crate::document::{ResumeDocument, SectionKey};
use crate::markdown::{escape, to_html};

const SIDE: [SectionKey; 4] = [
    SectionKey::Skills,
    SectionKey::Languages,
    SectionKey::Certifications,
    SectionKey::References,
];

fn band_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:11px;font-weight:700;letter-spacing:2px;color:{accent};\
         margin:18px 0 8px;text-transform:uppercase\">{label}</h2>"
    )
}

pub(crate) fn render(doc: &ResumeDocument) -> String {
    let style = EntryStyle::of(doc);
    let accent = escape(&doc.theme_color);
    let text = escape(&doc.text_color);
    let font = escape(&doc.font);
    let lang = doc.language;

    let mut band = String::new();
    let name = parts::full_name(&doc.personal_info);
    if !name.is_empty() {
        band.push_str(&format!(
            "<h1 style=\"margin:0;font-size:28px;letter-spacing:1px;color:#ffffff\">{}</h1>",
            escape(&name)
        ));
    }
    if !doc.personal_info.job_title.is_empty() {
        band.push_str(&format!(
            "<div style=\"font-size:13px;color:rgba(255,255,255,0.85)\">{}</div>",
            escape(&doc.personal_info.job_title)
        ));
    }
    let contacts = parts::contact_lines(&doc.personal_info);
    if !contacts.is_empty() {
        band.push_str(&format!(
            "<div style=\"font-size:10px;color:rgba(255,255,255,0.75);margin-top:6px\">{}</div>",
            contacts.join("  |  ")
        ));
    }
    let photo = parts::photo_img(doc, "rgba(255,255,255,0.6)")
        .map(|img| format!("<div style=\"margin-left:16px\">{img}</div>"))
        .unwrap_or_default();

    let mut main = String::new();
    if !doc.summary.is_empty() {
        main.push_str(&band_heading(profile_heading(lang), &accent));
        main.push_str(&format!(
            "<div style=\"font-size:12px;text-align:{};color:{text}\">{}</div>",
            doc.text_align.css(),
            to_html(&doc.summary)
        ));
    }
    for key in &doc.section_order {
        if SIDE.contains(key) {
            continue;
        }
        if let Some(items) = parts::section_items(doc, *key, style) {
            main.push_str(&band_heading(heading(*key, lang), &accent));
            main.push_str(&items);
        }
    }

    let mut side = String::new();
    for key in &doc.section_order {
        if !SIDE.contains(key) {
            continue;
        }
        if let Some(items) = parts::section_items(doc, *key, style) {
            side.push_str(&band_heading(heading(*key, lang), &accent));
            side.push_str(&items);
        }
    }

    format!(
        "<div style=\"width:210mm;min-height:297mm;background:#ffffff;font-family:{font}\">\
         <header style=\"display:flex;align-items:center;justify-content:space-between;\
         background:{accent};padding:26px 34px;box-sizing:border-box\">\
         <div>{band}</div>{photo}</header>\
         <div style=\"display:flex;padding:4px 34px 30px;box-sizing:border-box\">\
         <main style=\"width:64%;padding-right:22px\">{main}</main>\
         <aside style=\"width:36%;border-left:1px solid #e5e7eb;padding-left:22px\">{side}</aside>\
         </div></div>"
    )
}
