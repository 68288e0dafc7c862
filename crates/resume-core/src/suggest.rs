//! Canned writing suggestions keyed off a job title. No model behind
//! this; the lines are fixed templates the editor offers as starting
//! points.

/// Returns the suggestion lines for a job title. A blank title gets a
/// generic lead-in.
pub fn mock_suggestions(job_title: &str) -> Vec<String> {
    let title = job_title.trim();
    let lead = if title.is_empty() {
        "Experienced professional with a proven track record.".to_string()
    } else {
        format!("Experienced {title} with a proven track record.")
    };
    vec![
        lead,
        "Led a team of developers to build scalable applications.".to_string(),
        "Optimized performance by 30% through code refactoring.".to_string(),
        "Implemented CI/CD pipelines to streamline deployment.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_include_job_title() {
        let lines = mock_suggestions("Data Engineer");
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Data Engineer"));
    }

    #[test]
    fn test_blank_title_gets_generic_line() {
        let lines = mock_suggestions("   ");
        assert_eq!(
            lines[0],
            "Experienced professional with a proven track record."
        );
    }
}
