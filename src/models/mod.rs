pub mod analysis;
pub mod report;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, McpServerConfig, ResponseContent, ToolActivity,
};
pub use report::AnalysisSummary;
