pub mod analyzer;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use error::KabuError;

// Re-export commonly used types
pub use models::{
    AnalysisRequest, AnalysisResponse, AnalysisSummary, McpServerConfig, ResponseContent,
    ToolActivity,
};

pub use analyzer::{HttpDispatcher, OutputCollector, PromptTemplate, ResponseDispatcher};

pub use config::Credentials;

pub use cli::CliHandler;
