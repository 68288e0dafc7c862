//! Date label formatting for the template renderers.
//!
//! Entry dates are free-text strings. Values in `YYYY-MM` or bare `MM`
//! form get a localized abbreviated month label; anything else is passed
//! through verbatim so hand-written values like "Summer 2021" survive.

use crate::document::Language;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn month_name(month: u32, lang: Language) -> Option<&'static str> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let idx = (month - 1) as usize;
    Some(match lang {
        Language::En => MONTHS_EN[idx],
        Language::Id => MONTHS_ID[idx],
    })
}

/// Formats a single date value. Empty input stays empty.
pub fn format_date(value: &str, lang: Language) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // YYYY-MM → "Jan 2024"
    if let Some((year, month)) = trimmed.split_once('-') {
        if year.len() == 4 && month.len() == 2 && year.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(m) = month.parse::<u32>() {
                if let Some(name) = month_name(m, lang) {
                    return format!("{name} {year}");
                }
            }
        }
    }

    // Bare MM → "Jan"
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(m) = trimmed.parse::<u32>() {
            if let Some(name) = month_name(m, lang) {
                return name.to_string();
            }
        }
    }

    trimmed.to_string()
}

/// Localized label for an open-ended date range.
pub fn present_label(lang: Language) -> &'static str {
    match lang {
        Language::En => "Present",
        Language::Id => "Sekarang",
    }
}

/// Formats a start/end pair. An empty end with a non-empty start reads as
/// ongoing; both empty yields an empty label.
pub fn format_range(start: &str, end: &str, lang: Language) -> String {
    let start_fmt = format_date(start, lang);
    let end_fmt = format_date(end, lang);
    match (start_fmt.is_empty(), end_fmt.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{start_fmt} - {}", present_label(lang)),
        (true, false) => end_fmt,
        (false, false) => format!("{start_fmt} - {end_fmt}"),
    }
}
