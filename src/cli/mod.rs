pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::ReportFormatter;

use crate::analyzer::{HttpDispatcher, OutputCollector, PromptTemplate, ResponseDispatcher};
use crate::config::Credentials;
use crate::error::KabuError;
use crate::models::AnalysisRequest;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, KabuError> {
        let credentials = self.load_credentials()?;
        let dispatcher = HttpDispatcher::new(credentials.api_key.clone());
        self.run_pipeline(&credentials, &dispatcher).await
    }

    /// Same pipeline with the network seam substituted. Credentials are
    /// still read from the environment first, before anything else happens.
    pub async fn run_with_dispatcher(
        &self,
        dispatcher: &dyn ResponseDispatcher,
    ) -> Result<i32, KabuError> {
        let credentials = self.load_credentials()?;
        self.run_pipeline(&credentials, dispatcher).await
    }

    fn load_credentials(&self) -> Result<Credentials, KabuError> {
        let credentials = Credentials::from_env()?;

        if self.cli.is_verbose() {
            let prefix: String = credentials.api_key.chars().take(8).collect();
            eprintln!("✓ API key found ({}...)", prefix);
            eprintln!("✓ MCP server URL: {}", credentials.server_url);
        }

        Ok(credentials)
    }

    async fn run_pipeline(
        &self,
        credentials: &Credentials,
        dispatcher: &dyn ResponseDispatcher,
    ) -> Result<i32, KabuError> {
        let prompt = PromptTemplate::build_analysis_prompt(
            &self.cli.symbol,
            self.cli.months,
            self.cli.include_chart(),
        );

        if self.cli.is_debug() {
            eprintln!("🔧 Prompt:\n{}", prompt);
        }

        let request = AnalysisRequest::new(self.cli.model.clone(), prompt, credentials);

        if self.cli.is_verbose() {
            eprintln!(
                "🤖 Requesting analysis of {} over {} months with {}",
                self.cli.symbol, self.cli.months, self.cli.model
            );
        }

        let response = dispatcher.dispatch(&request).await?;

        if self.cli.is_verbose() {
            eprintln!(
                "📥 Response {} received: {} content items, {} tool steps",
                response.response_id,
                response.items.len(),
                response.tool_activity.len()
            );
        }

        let collector = OutputCollector::new(self.cli.output.clone());
        let summary = collector.collect(&response)?;

        let formatter = ReportFormatter::new(&self.cli);
        println!(
            "{}",
            formatter.format_analysis_report(&summary, &response, &self.cli.symbol)
        );

        Ok(0)
    }

    pub fn format_error(&self, error: &KabuError) -> String {
        ReportFormatter::new(&self.cli).format_error(error)
    }
}
