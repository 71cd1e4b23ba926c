//! Answers file loading (`--answers`)
//!
//! The file holds one table per section, keyed like the assessment itself:
//!
//! ```toml
//! [contentBaseline]
//! weeklyHours = 20
//! costPerPiece = 150
//! monthlyContent = 12
//!
//! [workloadAssessment]
//! stressLevel = 4
//! platforms = ["Blog", "LinkedIn"]
//! overtime = "Often"
//! ```

use anyhow::{Context, Result, bail};
use socialflip_domain::{Assessment, Section};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnswersFormat {
    Toml,
    Json,
}

impl AnswersFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase) {
            Some(ext) if ext == "toml" => Ok(Self::Toml),
            Some(ext) if ext == "json" => Ok(Self::Json),
            _ => bail!(
                "Unsupported answers file '{}': expected a .toml or .json file",
                path.display()
            ),
        }
    }
}

pub fn load_answers(path: &Path) -> Result<Assessment> {
    let format = AnswersFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    parse_answers(&content, format)
        .with_context(|| format!("Invalid answers file {}", path.display()))
}

fn parse_answers(content: &str, format: AnswersFormat) -> Result<Assessment> {
    let assessment: Assessment = match format {
        AnswersFormat::Toml => toml::from_str(content)?,
        AnswersFormat::Json => serde_json::from_str(content)?,
    };

    for section in Section::ALL {
        if let Some(record) = assessment.section(section) {
            for (question_id, _) in record.iter() {
                section.question(question_id)?;
            }
        }
    }

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialflip_domain::AnswerValue;

    const TOML_ANSWERS: &str = r#"
[contentBaseline]
weeklyHours = 20
costPerPiece = 150.5
monthlyContent = "12"

[workloadAssessment]
stressLevel = 4
platforms = ["Blog", "LinkedIn"]
overtime = "Often"

[repurposingCalculator]
primaryFormat = "Video"

[roiProjector]

[timeEstimator]
adaptationTime = 10
"#;

    #[test]
    fn test_parse_toml() {
        let assessment = parse_answers(TOML_ANSWERS, AnswersFormat::Toml).unwrap();

        let baseline = assessment.section(Section::Baseline).unwrap();
        assert_eq!(baseline.number("weeklyHours"), 20.0);
        assert_eq!(baseline.number("costPerPiece"), 150.5);
        assert_eq!(baseline.number("monthlyContent"), 12.0);
        assert_eq!(
            assessment.section(Section::Workload).unwrap().get("platforms"),
            Some(&AnswerValue::from(vec!["Blog", "LinkedIn"]))
        );
        // An empty table still counts as answered
        assert!(assessment.is_complete());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"roiProjector": {"revenuePerPiece": 500, "monthlyLeads": 100, "conversionRate": 5}}"#;
        let assessment = parse_answers(json, AnswersFormat::Json).unwrap();

        assert_eq!(assessment.section(Section::Roi).unwrap().number("monthlyLeads"), 100.0);
        assert!(!assessment.is_complete());
    }

    #[test]
    fn test_unknown_question_rejected() {
        let err = parse_answers("[roiProjector]\nbogus = 1\n", AnswersFormat::Toml).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_misspelled_section_rejected() {
        let err = parse_answers("[contentBaselin]\nweeklyHours = 20\n", AnswersFormat::Toml)
            .unwrap_err();
        assert!(err.to_string().contains("contentBaselin"));

        let json = r#"{"roiProjectr": {"revenuePerPiece": 500}}"#;
        assert!(parse_answers(json, AnswersFormat::Json).is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            AnswersFormat::from_path(Path::new("a.TOML")).unwrap(),
            AnswersFormat::Toml
        );
        assert_eq!(
            AnswersFormat::from_path(Path::new("a.json")).unwrap(),
            AnswersFormat::Json
        );
        assert!(AnswersFormat::from_path(Path::new("a.yaml")).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.toml");
        std::fs::write(&path, TOML_ANSWERS).unwrap();

        let assessment = load_answers(&path).unwrap();
        assert!(assessment.summary().is_some());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_answers(Path::new("/nonexistent/answers.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers file"));
    }
}
