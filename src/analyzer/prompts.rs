pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the analysis instruction string. Deterministic: the same inputs
    /// always produce the same prompt.
    pub fn build_analysis_prompt(symbol: &str, months: u32, include_chart: bool) -> String {
        let chart_section = if include_chart {
            format!(
                r#"

### Visualization
Generate using the code interpreter tool:
- **Price chart**: monthly closing prices for {symbol}
- **Volume chart**: trading volume per month

Ensure charts have clear titles, axis labels, and legends."#
            )
        } else {
            String::new()
        };

        format!(
            r#"Please analyze the {symbol} stock for the last {months} months using monthly data
as the time window and not the daily prices.
Use {server} as the data source for stock prices.

### Analysis
- Calculate month-over-month price changes (%)
- Identify trend direction (up/down/sideways)
- Compute key metrics: average closing price, volatility, volume trends{chart_section}"#,
            symbol = symbol,
            months = months,
            server = crate::models::analysis::MCP_SERVER_LABEL,
            chart_section = chart_section,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let first = PromptTemplate::build_analysis_prompt("AAPL", 3, true);
        let second = PromptTemplate::build_analysis_prompt("AAPL", 3, true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_contains_inputs() {
        let prompt = PromptTemplate::build_analysis_prompt("MSFT", 6, true);
        assert!(prompt.contains("MSFT"));
        assert!(prompt.contains("last 6 months"));
        assert!(prompt.contains("AlphaVantage"));
        assert!(prompt.contains("month-over-month"));
        assert!(prompt.contains("Price chart"));
        assert!(prompt.contains("Volume chart"));
    }

    #[test]
    fn test_prompt_without_chart() {
        let prompt = PromptTemplate::build_analysis_prompt("AAPL", 3, false);
        assert!(!prompt.contains("Visualization"));
        assert!(!prompt.contains("Price chart"));
        assert!(prompt.contains("trend direction"));
    }
}
