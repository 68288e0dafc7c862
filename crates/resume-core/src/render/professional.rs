//! Professional template: single centered-header column with underlined
//! section headings. The whole main flow follows the section order.

use super::parts::{self, EntryStyle};
use super::{heading, profile_heading};
use crate::document::ResumeDocument;
use crate::markdown::{escape, to_html};

fn section_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:14px;color:{accent};border-bottom:1px solid {accent};\
         padding-bottom:3px;margin:18px 0 8px\">{label}</h2>"
    )
}

pub(crate) fn render(doc: &ResumeDocument) -> String {
    let style = EntryStyle::of(doc);
    let accent = escape(&doc.theme_color);
    let text = escape(&doc.text_color);
    let font = escape(&doc.font);
    let lang = doc.language;

    let mut header = String::new();
    if let Some(img) = parts::photo_img(doc, &doc.theme_color) {
        header.push_str(&format!("<div style=\"margin-bottom:8px\">{img}</div>"));
    }
    let name = parts::full_name(&doc.personal_info);
    if !name.is_empty() {
        header.push_str(&format!(
            "<h1 style=\"margin:0;font-size:28px;letter-spacing:1px;color:{text}\">{}</h1>",
            escape(&name)
        ));
    }
    if !doc.personal_info.job_title.is_empty() {
        header.push_str(&format!(
            "<div style=\"font-size:14px;color:{accent}\">{}</div>",
            escape(&doc.personal_info.job_title)
        ));
    }
    let contacts = parts::contact_lines(&doc.personal_info);
    if !contacts.is_empty() {
        header.push_str(&format!(
            "<div style=\"font-size:11px;color:#6b7280;margin-top:6px\">{}</div>",
            contacts.join(" · ")
        ));
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
         padding:30px 34px;font-family:{font}\">\
         <header style=\"text-align:center;margin-bottom:10px\">{header}</header>\
         {body}</div>"
    )
}
