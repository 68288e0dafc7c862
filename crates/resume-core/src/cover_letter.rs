//! Deterministic cover-letter drafting from the résumé record.
//!
//! Same approach as the tailoring analysis: fixed Indonesian-language
//! paragraph templates keyed by tone, no model. The caller supplies the
//! target company and position; name, contact details, skills, and the
//! most recent employer come straight from the document. Missing values
//! surface as bracketed placeholders the user fills in by hand.

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;

/// Voice of the generated letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Confident,
    Creative,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn display_name(doc: &ResumeDocument) -> String {
    let name = format!(
        "{} {}",
        doc.personal_info.first_name.trim(),
        doc.personal_info.last_name.trim()
    );
    let name = name.trim();
    if name.is_empty() {
        "[Nama Anda]".to_string()
    } else {
        name.to_string()
    }
}

/// The first four named skills, or a generic stand-in.
fn skill_list(doc: &ResumeDocument) -> String {
    let names: Vec<&str> = doc
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|n| !n.is_empty())
        .take(4)
        .collect();
    if names.is_empty() {
        "berbagai bidang".to_string()
    } else {
        names.join(", ")
    }
}

fn latest_employer(doc: &ResumeDocument) -> &str {
    doc.experience
        .first()
        .map(|e| e.employer.trim())
        .unwrap_or("")
}

fn opening(tone: Tone, name: &str, position: &str, company: &str) -> String {
    let pos = or_placeholder(position, "[Posisi]");
    match tone {
        Tone::Formal => format!(
            "Kepada Yth.\nHR Manager / Tim Rekrutmen\n{}\n\nDengan hormat,\n\n\
             Melalui surat lamaran ini, saya {name}, mengajukan permohonan untuk \
             bergabung sebagai {pos} di {}.",
            or_placeholder(company, "[Nama Perusahaan]"),
            or_placeholder(company, "perusahaan yang Bapak/Ibu pimpin"),
        ),
        Tone::Friendly => format!(
            "Kepada Tim Rekrutmen {},\n\nHalo! Perkenalkan, saya {name}. Saya sangat \
             antusias untuk melamar posisi {pos} di {} karena...",
            or_placeholder(company, "[Nama Perusahaan]"),
            or_placeholder(company, "perusahaan Anda"),
        ),
        Tone::Confident => format!(
            "Kepada Yth. Tim Rekrutmen {},\n\nSaya {name}, profesional dengan rekam \
             jejak yang terbukti, dan saya yakin dapat memberikan dampak nyata sebagai \
             {pos} di {}.",
            or_placeholder(company, "[Nama Perusahaan]"),
            or_placeholder(company, "perusahaan Anda"),
        ),
        Tone::Creative => format!(
            "Halo Tim {} yang luar biasa!\n\nSaya {name}, dan bukan kebetulan jika saya \
             menemukan lowongan {pos} ini — saya percaya inilah kesempatan yang tepat \
             untuk menghadirkan perspektif segar dan semangat inovasi ke tim Anda.",
            or_placeholder(company, "[Nama Perusahaan]"),
        ),
    }
}

fn skill_paragraph(tone: Tone, skills: &str, employer: &str) -> String {
    match tone {
        Tone::Formal => {
            let exp = if employer.is_empty() {
                String::new()
            } else {
                format!(", termasuk pengalaman di {employer}")
            };
            format!(
                "Selama perjalanan karir saya, saya telah mengembangkan keahlian di \
                 bidang {skills}{exp}. Saya percaya kombinasi hard skill dan soft skill \
                 yang saya miliki dapat menjadi aset berharga bagi tim Anda."
            )
        }
        Tone::Friendly => {
            let exp = if employer.is_empty() {
                String::new()
            } else {
                format!(" dan pernah berkontribusi di {employer}")
            };
            format!(
                "Saya senang berbagi bahwa saya memiliki keahlian dalam {skills}{exp}. \
                 Saya seseorang yang suka belajar hal baru dan bekerja sama dalam tim \
                 yang dinamis!"
            )
        }
        Tone::Confident => {
            let exp = if employer.is_empty() {
                String::new()
            } else {
                format!(", didukung pengalaman langsung di {employer}")
            };
            format!(
                "Keahlian inti saya mencakup {skills}{exp}. Saya tidak hanya memenuhi \
                 kualifikasi — saya siap melampaui ekspektasi dan membawa hasil nyata."
            )
        }
        Tone::Creative => {
            let exp = if employer.is_empty() {
                String::new()
            } else {
                format!(" dan latar belakang di {employer}")
            };
            format!(
                "Dengan keahlian di {skills}{exp}, saya membawa perspektif yang unik: \
                 saya memadukan pendekatan analitis dengan sentuhan kreativitas yang \
                 menghasilkan solusi inovatif."
            )
        }
    }
}

fn why_paragraph(tone: Tone, why: &str, company: &str) -> Option<String> {
    let why = why.trim();
    if why.is_empty() {
        return None;
    }
    Some(match tone {
        Tone::Formal | Tone::Confident => format!(
            "Alasan saya sangat tertarik untuk bergabung dengan {} adalah {why}.",
            or_placeholder(company, "perusahaan ini"),
        ),
        Tone::Friendly | Tone::Creative => {
            format!("Yang membuat saya makin semangat? {why}!")
        }
    })
}

fn closing(tone: Tone, name: &str, email: &str, phone: &str) -> String {
    let email = or_placeholder(email, "[Email]");
    let phone = or_placeholder(phone, "[Telepon]");
    match tone {
        Tone::Formal => format!(
            "Demikian surat lamaran ini saya sampaikan. Saya berharap mendapat \
             kesempatan untuk berdiskusi lebih lanjut mengenai kontribusi yang dapat \
             saya berikan.\n\nHormat saya,\n{name}\n{email} | {phone}"
        ),
        Tone::Friendly => format!(
            "Saya sangat berharap bisa bicara lebih jauh dengan tim Anda! Terima kasih \
             sudah meluangkan waktu membaca surat ini.\n\nSalam hangat,\n{name}\n\
             {email} | {phone}"
        ),
        Tone::Confident => format!(
            "Saya siap untuk wawancara dan dapat segera memulai. Terima kasih atas \
             pertimbangannya.\n\nHormat saya,\n{name}\n{email} | {phone}"
        ),
        Tone::Creative => format!(
            "Saya tidak sabar untuk bertemu dan bertukar ide dengan tim Anda. Mari kita \
             ciptakan sesuatu yang luar biasa bersama!\n\nDengan antusias,\n{name}\n\
             {email} | {phone}"
        ),
    }
}

/// Drafts a complete cover letter. Pure and deterministic: same document
/// and inputs, same letter.
pub fn generate(
    doc: &ResumeDocument,
    tone: Tone,
    company: &str,
    position: &str,
    why: &str,
) -> String {
    let name = display_name(doc);
    let skills = skill_list(doc);
    let employer = latest_employer(doc);

    let mut letter = opening(tone, &name, position, company);
    letter.push_str("\n\n");
    letter.push_str(&skill_paragraph(tone, &skills, employer));
    if let Some(par) = why_paragraph(tone, why, company) {
        letter.push_str("\n\n");
        letter.push_str(&par);
    }
    letter.push_str("\n\n");
    letter.push_str(&closing(
        tone,
        &name,
        &doc.personal_info.email,
        &doc.personal_info.phone,
    ));
    letter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ExperienceEntry, SkillEntry};

    fn sample_doc() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.first_name = "Ada".to_string();
        doc.personal_info.last_name = "Lovelace".to_string();
        doc.personal_info.email = "ada@example.com".to_string();
        doc.personal_info.phone = "0812".to_string();
        for (i, name) in ["Rust", "SQL", "Docker", "Go", "Kubernetes"]
            .iter()
            .enumerate()
        {
            doc.skills.push(SkillEntry {
                id: format!("s{i}"),
                name: name.to_string(),
                level: String::new(),
            });
        }
        doc.experience.push(ExperienceEntry {
            id: "e1".to_string(),
            employer: "Acme".to_string(),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_letter_pulls_document_fields() {
        let letter = generate(&sample_doc(), Tone::Formal, "Gojek", "Engineer", "");
        assert!(letter.contains("Ada Lovelace"));
        assert!(letter.contains("Gojek"));
        assert!(letter.contains("Engineer"));
        assert!(letter.contains("Acme"));
        assert!(letter.contains("ada@example.com | 0812"));
        // Only the first four skills appear.
        assert!(letter.contains("Rust, SQL, Docker, Go"));
        assert!(!letter.contains("Kubernetes"));
    }

    #[test]
    fn test_empty_document_uses_placeholders() {
        let letter = generate(&ResumeDocument::default(), Tone::Formal, "", "", "");
        assert!(letter.contains("[Nama Anda]"));
        assert!(letter.contains("[Nama Perusahaan]"));
        assert!(letter.contains("[Posisi]"));
        assert!(letter.contains("berbagai bidang"));
        assert!(letter.contains("[Email] | [Telepon]"));
    }

    #[test]
    fn test_tones_produce_distinct_letters() {
        let doc = sample_doc();
        let formal = generate(&doc, Tone::Formal, "Gojek", "Engineer", "");
        let friendly = generate(&doc, Tone::Friendly, "Gojek", "Engineer", "");
        let confident = generate(&doc, Tone::Confident, "Gojek", "Engineer", "");
        let creative = generate(&doc, Tone::Creative, "Gojek", "Engineer", "");
        assert!(formal.starts_with("Kepada Yth.\nHR Manager"));
        assert!(friendly.contains("Halo! Perkenalkan"));
        assert!(confident.contains("rekam jejak yang terbukti"));
        assert!(creative.starts_with("Halo Tim Gojek yang luar biasa!"));
        assert_ne!(formal, friendly);
        assert_ne!(confident, creative);
    }

    #[test]
    fn test_why_paragraph_varies_by_tone() {
        let doc = sample_doc();
        let formal = generate(&doc, Tone::Formal, "Gojek", "Engineer", "budaya inovasinya");
        assert!(formal.contains("Alasan saya sangat tertarik untuk bergabung dengan Gojek"));
        assert!(formal.contains("budaya inovasinya."));

        let friendly = generate(&doc, Tone::Friendly, "Gojek", "Engineer", "budaya inovasinya");
        assert!(friendly.contains("Yang membuat saya makin semangat? budaya inovasinya!"));

        let without = generate(&doc, Tone::Formal, "Gojek", "Engineer", "");
        assert!(!without.contains("Alasan saya"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let doc = sample_doc();
        assert_eq!(
            generate(&doc, Tone::Creative, "Gojek", "Engineer", "x"),
            generate(&doc, Tone::Creative, "Gojek", "Engineer", "x")
        );
    }
}
