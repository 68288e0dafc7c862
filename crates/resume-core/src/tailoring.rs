//! Keyword tailoring analysis: fixed heuristics, no model.
//!
//! Compares a job description against the résumé using per-industry
//! keyword inventories. Pure and deterministic: same inputs, same report.

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;

/// Industry whose keyword inventory drives the analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Tech,
    Finance,
    Marketing,
    Hr,
    Engineering,
}

impl Industry {
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Industry::Tech => &[
                "agile",
                "scrum",
                "leadership",
                "collaboration",
                "problem-solving",
                "analytical",
                "communication",
                "innovation",
                "cloud",
                "API",
                "CI/CD",
                "data-driven",
            ],
            Industry::Finance => &[
                "financial analysis",
                "budgeting",
                "forecasting",
                "risk management",
                "compliance",
                "reporting",
                "stakeholder management",
                "strategic planning",
            ],
            Industry::Marketing => &[
                "brand management",
                "SEO",
                "content strategy",
                "campaign management",
                "analytics",
                "ROI",
                "CRM",
                "social media",
                "lead generation",
            ],
            Industry::Hr => &[
                "talent acquisition",
                "employee engagement",
                "performance management",
                "HRIS",
                "onboarding",
                "training & development",
                "organizational development",
            ],
            Industry::Engineering => &[
                "project management",
                "technical design",
                "cross-functional",
                "quality assurance",
                "process improvement",
                "lean",
                "six sigma",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Success,
    Warning,
    Error,
}

/// One heuristic improvement suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringTip {
    pub kind: TipKind,
    pub title: String,
    pub desc: String,
}

/// Full analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringReport {
    /// 0–100 match score.
    pub score: u32,
    /// Inventory keywords found in the job description.
    pub found_in_jd: Vec<String>,
    /// Found keywords not present anywhere in the résumé.
    pub missing_in_resume: Vec<String>,
    /// Found keywords already covered by the résumé.
    pub already_present: Vec<String>,
    pub suggestions: Vec<TailoringTip>,
}

/// Analyzes `job_description` against the résumé.
///
/// Score: coverage of matched keywords weighted to 60, plus 5 per
/// experience entry, 3 per skill, and 20 for a substantial summary
/// (5 otherwise), capped at 100.
pub fn analyze(doc: &ResumeDocument, job_description: &str, industry: Industry) -> TailoringReport {
    let jd_lower = job_description.to_lowercase();
    // Substring search over the serialized document, entry text included.
    let resume_text = serde_json::to_string(doc).unwrap_or_default().to_lowercase();

    let found_in_jd: Vec<String> = industry
        .keywords()
        .iter()
        .filter(|kw| jd_lower.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect();
    let (already_present, missing_in_resume): (Vec<String>, Vec<String>) = found_in_jd
        .iter()
        .cloned()
        .partition(|kw| resume_text.contains(&kw.to_lowercase()));

    let coverage =
        already_present.len() as f64 / found_in_jd.len().max(1) as f64 * 60.0;
    let summary_bonus = if doc.summary.len() > 50 { 20.0 } else { 5.0 };
    let raw = coverage
        + doc.experience.len() as f64 * 5.0
        + doc.skills.len() as f64 * 3.0
        + summary_bonus;
    let score = (raw.round() as u32).min(100);

    let mut suggestions = Vec::new();
    if doc.summary.len() < 80 {
        suggestions.push(TailoringTip {
            kind: TipKind::Warning,
            title: "Add a professional summary".to_string(),
            desc: "Your resume lacks a strong opening summary. Add a paragraph reflecting the \
                   skills relevant to this position."
                .to_string(),
        });
    }
    if !missing_in_resume.is_empty() {
        let sample = missing_in_resume
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        suggestions.push(TailoringTip {
            kind: TipKind::Error,
            title: "Important keywords missing from your resume".to_string(),
            desc: format!(
                "These keywords appear in the job description but not in your resume: {sample}. \
                 Consider working them in naturally."
            ),
        });
    }
    if doc.skills.len() < 5 {
        suggestions.push(TailoringTip {
            kind: TipKind::Warning,
            title: "Add more skills".to_string(),
            desc: "Your resume lists fewer than 5 skills. Add technical and soft skills relevant \
                   to the role."
                .to_string(),
        });
    }
    if doc.experience.is_empty() {
        suggestions.push(TailoringTip {
            kind: TipKind::Error,
            title: "No experience listed".to_string(),
            desc: "Add relevant work experience or internships.".to_string(),
        });
    }
    if !already_present.is_empty() {
        let sample = already_present
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        suggestions.push(TailoringTip {
            kind: TipKind::Success,
            title: "Keywords already covered".to_string(),
            desc: format!("These keywords are already in your resume: {sample}."),
        });
    }

    TailoringReport {
        score,
        found_in_jd,
        missing_in_resume,
        already_present,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ExperienceEntry, SkillEntry};

    fn doc_with_skills(names: &[&str]) -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        for (i, name) in names.iter().enumerate() {
            doc.skills.push(SkillEntry {
                id: format!("s{i}"),
                name: name.to_string(),
                level: String::new(),
            });
        }
        doc
    }

    #[test]
    fn test_empty_resume_scores_low() {
        let report = analyze(
            &ResumeDocument::default(),
            "We want agile leadership and cloud experience",
            Industry::Tech,
        );
        assert!(report.score <= 10);
        assert_eq!(report.found_in_jd, vec!["agile", "leadership", "cloud"]);
        assert_eq!(report.already_present, Vec::<String>::new());
        assert_eq!(report.missing_in_resume.len(), 3);
        assert!(report
            .suggestions
            .iter()
            .any(|tip| tip.kind == TipKind::Error && tip.title.contains("No experience")));
    }

    #[test]
    fn test_matching_keywords_raise_score() {
        let mut doc = doc_with_skills(&["Agile", "Cloud", "Leadership", "Go", "SQL"]);
        doc.summary = "Seasoned platform engineer with a decade of cloud and agile delivery \
                       experience across several teams."
            .to_string();
        doc.experience.push(ExperienceEntry {
            id: "e1".to_string(),
            job_title: "Engineer".to_string(),
            ..Default::default()
        });

        let report = analyze(&doc, "agile leadership cloud", Industry::Tech);
        assert_eq!(report.missing_in_resume, Vec::<String>::new());
        assert_eq!(report.already_present.len(), 3);
        // 60 coverage + 5 experience + 15 skills + 20 summary = 100.
        assert_eq!(report.score, 100);
        assert!(report
            .suggestions
            .iter()
            .any(|tip| tip.kind == TipKind::Success));
    }

    #[test]
    fn test_score_caps_at_100() {
        let mut doc = doc_with_skills(&["a"; 40]);
        doc.summary = "x".repeat(100);
        let report = analyze(&doc, "", Industry::Tech);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let doc = doc_with_skills(&["seo"]);
        let report = analyze(&doc, "Looking for an SEO specialist", Industry::Marketing);
        assert_eq!(report.already_present, vec!["SEO"]);
    }
}
