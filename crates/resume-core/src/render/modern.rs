//! Modern template: light sidebar on the left (photo, contact, skills,
//! languages), accent-colored name, main column follows the section order.

use super::parts::{self, EntryStyle};
use super::{contact_heading, heading, profile_heading};
use crate::document::{ResumeDocument, SectionKey};
use crate::markdown::{escape, to_html};

const SIDEBAR: [SectionKey; 2] = [SectionKey::Skills, SectionKey::Languages];

fn side_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:11px;letter-spacing:1px;text-transform:uppercase;\
         color:{accent};margin:16px 0 6px\">{label}</h2>"
    )
}

fn main_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:13px;text-transform:uppercase;color:{accent};\
         border-bottom:2px solid {accent};padding-bottom:2px;margin:18px 0 8px\">{label}</h2>"
    )
}

pub(crate) fn render(doc: &ResumeDocument) -> String {
    let style = EntryStyle::of(doc);
    let accent = escape(&doc.theme_color);
    let text = escape(&doc.text_color);
    let font = escape(&doc.font);
    let lang = doc.language;

    let mut sidebar = String::new();
    if let Some(img) = parts::photo_img(doc, &doc.theme_color) {
        sidebar.push_str(&format!(
            "<div style=\"text-align:center;margin-bottom:14px\">{img}</div>"
        ));
    }
    let contacts = parts::contact_lines(&doc.personal_info);
    if !contacts.is_empty() {
        sidebar.push_str(&side_heading(contact_heading(lang), &accent));
        for line in contacts {
            sidebar.push_str(&format!(
                "<div style=\"font-size:11px;margin-bottom:3px;word-break:break-word;\
                 color:{text}\">{line}</div>"
            ));
        }
    }
    for key in &doc.section_order {
        if !SIDEBAR.contains(key) {
            continue;
        }
        if let Some(items) = parts::section_items(doc, *key, style) {
            sidebar.push_str(&side_heading(heading(*key, lang), &accent));
            sidebar.push_str(&items);
        }
    }

    let mut main = String::new();
    let name = parts::full_name(&doc.personal_info);
    if !name.is_empty() {
        main.push_str(&format!(
            "<h1 style=\"margin:0;font-size:26px;color:{accent}\">{}</h1>",
            escape(&name)
        ));
    }
    if !doc.personal_info.job_title.is_empty() {
        main.push_str(&format!(
            "<div style=\"font-size:14px;color:{text};margin-bottom:6px\">{}</div>",
            escape(&doc.personal_info.job_title)
        ));
    }
    if !doc.summary.is_empty() {
        main.push_str(&main_heading(profile_heading(lang), &accent));
        main.push_str(&format!(
            "<div style=\"font-size:12px;text-align:{};color:{text}\">{}</div>",
            doc.text_align.css(),
            to_html(&doc.summary)
        ));
    }
    for key in &doc.section_order {
        if SIDEBAR.contains(key) {
            continue;
        }
        if let Some(items) = parts::section_items(doc, *key, style) {
            main.push_str(&main_heading(heading(*key, lang), &accent));
            main.push_str(&items);
        }
    }

    format!(
        "<div style=\"display:flex;width:210mm;min-height:297mm;background:#ffffff;\
         font-family:{font}\">\
         <aside style=\"width:32%;background:#f3f4f6;padding:26px 18px;box-sizing:border-box\">\
         {sidebar}</aside>\
         <main style=\"width:68%;padding:28px 26px;box-sizing:border-box\">{main}</main>\
         </div>"
    )
}
