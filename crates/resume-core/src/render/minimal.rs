//! Minimal template: one quiet column, hairline rules, letter-spaced
//! uppercase headings, no color blocks beyond the accent on headings.

use super::parts::{self, EntryStyle};
use super::{heading, profile_heading};
use crate::document::ResumeDocument;
use crate::markdown::{escape, to_html};

fn section_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:11px;font-weight:600;letter-spacing:3px;\
         text-transform:uppercase;color:{accent};margin:20px 0 8px\">{label}</h2>"
    )
}

pub(crate) fn render(doc: &ResumeDocument) -> String {
    let style = EntryStyle::of(doc);
    let accent = escape(&doc.theme_color);
    let text = escape(&doc.text_color);
    let font = escape(&doc.font);
    let lang = doc.language;

    let mut header = String::new();
    let name = parts::full_name(&doc.personal_info);
    if !name.is_empty() {
        header.push_str(&format!(
            "<h1 style=\"margin:0;font-size:24px;font-weight:400;letter-spacing:4px;\
             text-transform:uppercase;color:{text}\">{}</h1>",
            escape(&name)
        ));
    }
    if !doc.personal_info.job_title.is_empty() {
        header.push_str(&format!(
            "<div style=\"font-size:12px;letter-spacing:2px;color:#6b7280;margin-top:4px\">\
             {}</div>",
            escape(&doc.personal_info.job_title)
        ));
    }
    let contacts = parts::contact_lines(&doc.personal_info);
    if !contacts.is_empty() {
        header.push_str(&format!(
            "<div style=\"font-size:10px;color:#6b7280;margin-top:8px\">{}</div>",
            contacts.join("  |  ")
        ));
    }
    if let Some(img) = parts::photo_img(doc, &doc.theme_color) {
        header = format!(
            "<div style=\"display:flex;justify-content:space-between;align-items:center\">\
             <div>{header}</div>{img}</div>"
        );
    }

    let mut body = String::new();
    if !doc.summary.is_empty() {
        body.push_str(&section_heading(profile_heading(lang), &accent));
        body.push_str(&format!(
            "<div style=\"font-size:12px;text-align:{};color:{text}\">{}</div>",
            doc.text_align.css(),
            to_html(&doc.summary)
        ));
    }
    for key in &doc.section_order {
        if let Some(items) = parts::section_items(doc, *key, style) {
            body.push_str(&section_heading(heading(*key, lang), &accent));
            body.push_str(&items);
        }
    }

    format!(
        "<div style=\"width:210mm;min-height:297mm;background:#ffffff;box-sizing:border-box;\
         padding:34px 38px;font-family:{font}\">\
         {header}\
         <hr style=\"border:none;border-top:1px solid #e5e7eb;margin:14px 0\">\
         {body}</div>"
    )
}
