use crate::error::KabuError;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_ARTIFACT_PATH: &str = "stock_image.png";

#[derive(Parser, Debug)]
#[command(name = "kabu")]
#[command(about = "Stock trend analysis via the OpenAI Responses API with MCP market data")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ticker symbol to analyze
    #[arg(short = 's', long, default_value = "AAPL", value_parser = validate_symbol)]
    pub symbol: String,

    /// Time window in months (1-24)
    #[arg(long, default_value = "3", value_parser = validate_months)]
    pub months: u32,

    /// Model to use for the analysis
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Where to save the chart image
    #[arg(short = 'o', long, default_value = DEFAULT_ARTIFACT_PATH)]
    pub output: PathBuf,

    /// Skip the chart request in the prompt
    #[arg(long)]
    pub no_chart: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including the full prompt
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, KabuError> {
        Self::try_parse().map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => KabuError::InvalidArguments(e.to_string()),
        })
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn include_chart(&self) -> bool {
        !self.no_chart
    }

    pub fn should_use_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

fn validate_symbol(s: &str) -> Result<String, String> {
    let symbol = s.trim().to_uppercase();
    if symbol.is_empty() || symbol.len() > 6 {
        return Err("Symbol must be 1-6 characters".to_string());
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
        return Err("Symbol may only contain letters, digits, and dots".to_string());
    }
    Ok(symbol)
}

fn validate_months(s: &str) -> Result<u32, String> {
    let months: u32 = s.parse().map_err(|_| "Months must be a number")?;

    if (1..=24).contains(&months) {
        Ok(months)
    } else {
        Err("Months must be between 1 and 24".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parsing() {
        let cli = Cli::try_parse_from(vec!["kabu"]).unwrap();

        assert_eq!(cli.symbol, "AAPL");
        assert_eq!(cli.months, 3);
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_ARTIFACT_PATH));
        assert!(cli.include_chart());
        assert!(!cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from(vec![
            "kabu",
            "--symbol",
            "msft",
            "--months",
            "12",
            "--model",
            "gpt-5",
            "--output",
            "/tmp/chart.png",
            "--no-chart",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.symbol, "MSFT");
        assert_eq!(cli.months, 12);
        assert_eq!(cli.model, "gpt-5");
        assert_eq!(cli.output, PathBuf::from("/tmp/chart.png"));
        assert!(!cli.include_chart());
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_debug_implies_verbose() {
        let cli = Cli::try_parse_from(vec!["kabu", "--debug"]).unwrap();
        assert!(cli.is_debug());
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_symbol_validation() {
        assert!(Cli::try_parse_from(vec!["kabu", "-s", "BRK.B"]).is_ok());
        assert!(Cli::try_parse_from(vec!["kabu", "-s", "TOOLONGSYM"]).is_err());
        assert!(Cli::try_parse_from(vec!["kabu", "-s", "AA PL"]).is_err());
    }

    #[test]
    fn test_months_validation() {
        assert!(Cli::try_parse_from(vec!["kabu", "--months", "0"]).is_err());
        assert!(Cli::try_parse_from(vec!["kabu", "--months", "25"]).is_err());
        assert!(Cli::try_parse_from(vec!["kabu", "--months", "24"]).is_ok());
        assert!(Cli::try_parse_from(vec!["kabu", "--months", "three"]).is_err());
    }
}
