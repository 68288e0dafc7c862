//! Tech template: monospace-flavoured headings with a `>` prompt, skills
//! as outlined chips, single column.

use super::parts::{self, EntryStyle};
use super::{heading, profile_heading};
use crate::document::{ResumeDocument, SectionKey};
use crate::markdown::{escape, to_html};

fn section_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-family:'Courier New',monospace;font-size:13px;color:{accent};\
         margin:18px 0 8px\">&gt; {label}</h2>"
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
        header.push_str(&format!("<div style=\"margin-right:16px\">{img}</div>"));
    }
    let mut identity = String::new();
    let name = parts::full_name(&doc.personal_info);
    if !name.is_empty() {
        identity.push_str(&format!(
            "<h1 style=\"margin:0;font-family:'Courier New',monospace;font-size:24px;\
             color:{text}\">{}</h1>",
            escape(&name)
        ));
    }
    if !doc.personal_info.job_title.is_empty() {
        identity.push_str(&format!(
            "<div style=\"font-size:13px;color:{accent}\">{}</div>",
            escape(&doc.personal_info.job_title)
        ));
    }
    let contacts = parts::contact_lines(&doc.personal_info);
    if !contacts.is_empty() {
        identity.push_str(&format!(
            "<div style=\"font-size:11px;color:#6b7280;margin-top:4px\">{}</div>",
            contacts.join(" | ")
        ));
    }
    header.push_str(&format!("<div>{identity}</div>"));

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
        let items = if *key == SectionKey::Skills {
            parts::skill_chips(doc, style)
        } else {
            parts::section_items(doc, *key, style)
        };
        if let Some(items) = items {
            body.push_str(&section_heading(heading(*key, lang), &accent));
            body.push_str(&items);
        }
    }

    format!(
        "<div style=\"width:210mm;min-height:297mm;background:#ffffff;box-sizing:border-box;\
         padding:30px 34px;font-family:{font}\">\
         <header style=\"display:flex;align-items:center;border:1px solid {accent};\
         border-radius:4px;padding:14px 16px\">{header}</header>\
         {body}</div>"
    )
}
