use crate::cli::args::Cli;
use crate::error::KabuError;
use crate::models::{AnalysisResponse, AnalysisSummary};

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(cli: &Cli) -> Self {
        Self {
            use_colors: cli.should_use_color(),
            verbose: cli.is_verbose(),
        }
    }

    pub fn format_analysis_report(
        &self,
        summary: &AnalysisSummary,
        response: &AnalysisResponse,
        symbol: &str,
    ) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(symbol, &response.model));
        output.push_str("\n\n");

        if self.verbose && !response.tool_activity.is_empty() {
            output.push_str(&self.format_section("Tool activity"));
            output.push('\n');
            for activity in &response.tool_activity {
                output.push_str(&format!(
                    "  [{}] {}\n",
                    activity.server_label, activity.detail
                ));
            }
            output.push('\n');
        }

        output.push_str(&summary.report_text);
        output.push('\n');

        if summary.has_artifacts() {
            output.push('\n');
            for path in &summary.artifact_paths {
                output.push_str(&format!("💾 Saved chart to: {}\n", path.display()));
            }
        }

        output
    }

    fn format_header(&self, symbol: &str, model: &str) -> String {
        if self.use_colors {
            format!(
                "\x1b[1m\x1b[36m📈 === KABU STOCK ANALYSIS === 📉\x1b[0m\n\
                 Symbol: {} | Model: {}",
                symbol, model
            )
        } else {
            format!(
                "📈 === KABU STOCK ANALYSIS === 📉\n\
                 Symbol: {} | Model: {}",
                symbol, model
            )
        }
    }

    fn format_section(&self, title: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}\x1b[0m", title)
        } else {
            format!("{}\n{}", title, "─".repeat(title.len()))
        }
    }

    pub fn format_error(&self, error: &KabuError) -> String {
        let (color_code, reset) = if self.use_colors {
            ("\x1b[1m\x1b[31m", "\x1b[0m")
        } else {
            ("", "")
        };

        let remedy = match error {
            KabuError::MissingConfiguration { key } => format!(
                "Set {} in your environment before running kabu.",
                key
            ),
            KabuError::Authentication(_) => "Check that the API key is correct, has not expired, \
                and that your account is still active."
                .to_string(),
            KabuError::Api(_) => "The service rejected the request. Check remaining quota and \
                the service status page, then try again later."
                .to_string(),
            KabuError::Network(_) => "Could not reach the API. Check your network connection \
                and any proxy settings."
                .to_string(),
            KabuError::EmptyResponse => "The model finished without producing output. Re-run \
                the analysis; if it persists, try a different model."
                .to_string(),
            KabuError::InvalidResponse(_) => "The service returned something unexpected. Re-run \
                the analysis; if it persists, report the error above."
                .to_string(),
            _ => "Re-run with --debug and report the error above if it persists.".to_string(),
        };

        format!("{}❌ {}{}\n   {}", color_code, error, reset, remedy)
    }

    pub fn format_progress(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[36m📈 {}\x1b[0m", message)
        } else {
            format!("📈 {}", message)
        }
    }
}
