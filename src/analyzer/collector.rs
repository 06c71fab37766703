use crate::error::KabuError;
use crate::models::{AnalysisResponse, AnalysisSummary, ResponseContent};
use std::fs;
use std::path::PathBuf;

/// Turns an `AnalysisResponse` into a displayable report, persisting any
/// image artifacts along the way.
pub struct OutputCollector {
    artifact_path: PathBuf,
}

impl OutputCollector {
    pub fn new(artifact_path: PathBuf) -> Self {
        Self { artifact_path }
    }

    /// Every image is written to the configured path, overwriting whatever
    /// was there. Writes are not transactional: a crash mid-write can leave
    /// a partial file behind.
    pub fn collect(&self, response: &AnalysisResponse) -> Result<AnalysisSummary, KabuError> {
        if !response.has_content() {
            return Err(KabuError::EmptyResponse);
        }

        let mut report_sections = Vec::new();
        let mut artifact_written = false;

        for item in &response.items {
            match item {
                ResponseContent::Text(text) => report_sections.push(text.as_str()),
                ResponseContent::Image { bytes, .. } => {
                    fs::write(&self.artifact_path, bytes)?;
                    artifact_written = true;
                }
            }
        }

        let artifact_paths = if artifact_written {
            vec![self.artifact_path.clone()]
        } else {
            Vec::new()
        };

        Ok(AnalysisSummary::new(
            report_sections.join("\n\n"),
            artifact_paths,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisResponse;

    fn response_with(items: Vec<ResponseContent>) -> AnalysisResponse {
        let mut response = AnalysisResponse::new("resp_1".to_string(), "gpt-5-mini".to_string());
        response.items = items;
        response
    }

    #[test]
    fn test_text_and_image_collected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock_image.png");
        let collector = OutputCollector::new(path.clone());

        let image_bytes = vec![0x89, 0x50, 0x4e, 0x47];
        let response = response_with(vec![
            ResponseContent::Text("AAPL rose 2%".to_string()),
            ResponseContent::Image {
                bytes: image_bytes.clone(),
                filename: Some("chart.png".to_string()),
            },
        ]);

        let summary = collector.collect(&response).unwrap();
        assert!(summary.report_text.contains("AAPL rose 2%"));
        assert_eq!(summary.artifact_paths, vec![path.clone()]);
        assert_eq!(fs::read(&path).unwrap(), image_bytes);
    }

    #[test]
    fn test_empty_response_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock_image.png");
        let collector = OutputCollector::new(path.clone());

        let response = response_with(Vec::new());
        let err = collector.collect(&response).unwrap_err();
        assert!(matches!(err, KabuError::EmptyResponse));
        assert!(!path.exists());
    }

    #[test]
    fn test_later_image_overwrites_fixed_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock_image.png");
        let collector = OutputCollector::new(path.clone());

        let response = response_with(vec![
            ResponseContent::Image {
                bytes: vec![1, 2, 3],
                filename: None,
            },
            ResponseContent::Image {
                bytes: vec![9, 9, 9],
                filename: None,
            },
        ]);

        let summary = collector.collect(&response).unwrap();
        assert_eq!(summary.artifact_paths.len(), 1);
        assert_eq!(fs::read(&path).unwrap(), vec![9, 9, 9]);
    }

    #[test]
    fn test_text_sections_joined() {
        let dir = tempfile::tempdir().unwrap();
        let collector = OutputCollector::new(dir.path().join("stock_image.png"));

        let response = response_with(vec![
            ResponseContent::Text("Trend: up".to_string()),
            ResponseContent::Text("Volume: flat".to_string()),
        ]);

        let summary = collector.collect(&response).unwrap();
        assert_eq!(summary.report_text, "Trend: up\n\nVolume: flat");
        assert!(!summary.has_artifacts());
    }
}
