//! Creative template: full-height accent panel on the left carrying the
//! photo (or a monogram), contact details and the compact sections; the
//! white main column carries the narrative sections.

use super::parts::{self, EntryStyle};
use super::{contact_heading, heading, profile_heading};
use crate::document::{ResumeDocument, SectionKey};
use crate::markdown::{escape, to_html};

const PANEL: [SectionKey; 4] = [
    SectionKey::Skills,
    SectionKey::Languages,
    SectionKey::Certifications,
    SectionKey::References,
];

fn panel_heading(label: &str) -> String {
    format!(
        "<h2 style=\"font-size:10px;font-weight:700;letter-spacing:2px;text-transform:uppercase;\
         color:#ffffff;opacity:0.8;margin:16px 0 6px\">{label}</h2>"
    )
}

fn main_heading(label: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:12px;font-weight:700;letter-spacing:1px;text-transform:uppercase;\
         color:{accent};margin:16px 0 6px\">{label}</h2>"
    )
}

pub(crate) fn render(doc: &ResumeDocument) -> String {
    let accent = escape(&doc.theme_color);
    let text = escape(&doc.text_color);
    let font = escape(&doc.font);
    let lang = doc.language;
    let main_style = EntryStyle::of(doc);
    // Panel entries sit on the accent background, so they render white.
    let panel_style = EntryStyle {
        accent: "#ffffff",
        text: "#ffffff",
        align: doc.text_align,
        lang,
    };

    let mut panel = String::new();
    match parts::photo_img(doc, "rgba(255,255,255,0.6)") {
        Some(img) => panel.push_str(&format!("<div style=\"margin-bottom:12px\">{img}</div>")),
        None => {
            let initials = parts::initials(&doc.personal_info);
            if doc.show_photo && !initials.is_empty() {
                let px = doc.photo_size.px();
                panel.push_str(&format!(
                    "<div style=\"width:{px}px;height:{px}px;border-radius:50%;\
                     background:rgba(255,255,255,0.2);color:#ffffff;font-size:28px;\
                     font-weight:700;display:flex;align-items:center;justify-content:center;\
                     margin-bottom:12px\">{initials}</div>"
                ));
            }
        }
    }
    let name = parts::full_name(&doc.personal_info);
    if !name.is_empty() {
        panel.push_str(&format!(
            "<h1 style=\"margin:0;font-size:22px;line-height:1.2;color:#ffffff\">{}</h1>",
            escape(&name)
        ));
    }
    if !doc.personal_info.job_title.is_empty() {
        panel.push_str(&format!(
            "<div style=\"font-size:12px;color:rgba(255,255,255,0.85);margin-top:4px\">{}</div>",
            escape(&doc.personal_info.job_title)
        ));
    }
    let contacts = parts::contact_lines(&doc.personal_info);
    if !contacts.is_empty() {
        panel.push_str(&panel_heading(contact_heading(lang)));
        for line in contacts {
            panel.push_str(&format!(
                "<div style=\"font-size:10px;color:#ffffff;margin-bottom:3px;\
                 word-break:break-word\">{line}</div>"
            ));
        }
    }
    for key in &doc.section_order {
        if !PANEL.contains(key) {
            continue;
        }
        if let Some(items) = parts::section_items(doc, *key, panel_style) {
            panel.push_str(&panel_heading(heading(*key, lang)));
            panel.push_str(&items);
        }
    }

    let mut main = String::new();
    if !doc.summary.is_empty() {
        main.push_str(&main_heading(profile_heading(lang), &accent));
        main.push_str(&format!(
            "<div style=\"font-size:12px;text-align:{};color:{text}\">{}</div>",
            doc.text_align.css(),
            to_html(&doc.summary)
        ));
    }
    for key in &doc.section_order {
        if PANEL.contains(key) {
            continue;
        }
        if let Some(items) = parts::section_items(doc, *key, main_style) {
            main.push_str(&main_heading(heading(*key, lang), &accent));
            main.push_str(&items);
        }
    }

    format!(
        "<div style=\"display:flex;width:210mm;min-height:297mm;background:#ffffff;\
         font-family:{font}\">\
         <aside style=\"width:34%;background:{accent};padding:26px 18px;\
         box-sizing:border-box\">{panel}</aside>\
         <main style=\"width:66%;padding:26px 24px;box-sizing:border-box\">{main}</main>\
         </div>"
    )
}
