use std::path::PathBuf;

/// What a run produced: the displayable report and every artifact written.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub report_text: String,
    pub artifact_paths: Vec<PathBuf>,
}

impl AnalysisSummary {
    pub fn new(report_text: String, artifact_paths: Vec<PathBuf>) -> Self {
        Self {
            report_text,
            artifact_paths,
        }
    }

    pub fn has_artifacts(&self) -> bool {
        !self.artifact_paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_artifacts() {
        let summary = AnalysisSummary::new("report".to_string(), vec![]);
        assert!(!summary.has_artifacts());

        let summary = AnalysisSummary::new(
            "report".to_string(),
            vec![PathBuf::from("stock_image.png")],
        );
        assert!(summary.has_artifacts());
    }
}
