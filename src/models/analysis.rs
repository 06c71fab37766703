use crate::config::Credentials;

pub const MCP_SERVER_LABEL: &str = "AlphaVantage";
pub const MCP_SERVER_DESCRIPTION: &str = "Alpha Vantage MCP server for financial market data";

/// Remote tool server reference embedded in the outbound request. The LLM
/// service performs tool discovery and tool calls against it; this program
/// never contacts the server directly.
#[derive(Debug, Clone, PartialEq)]
pub struct McpServerConfig {
    pub server_label: String,
    pub server_description: String,
    pub server_url: String,
    pub authorization: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub model: String,
    pub prompt: String,
    pub mcp_server: McpServerConfig,
}

impl AnalysisRequest {
    pub fn new(model: String, prompt: String, credentials: &Credentials) -> Self {
        Self {
            model,
            prompt,
            mcp_server: McpServerConfig {
                server_label: MCP_SERVER_LABEL.to_string(),
                server_description: MCP_SERVER_DESCRIPTION.to_string(),
                server_url: credentials.server_url.clone(),
                authorization: credentials.authorization.clone(),
            },
        }
    }
}

/// Domain view of a completed API reply: the content items in output order,
/// plus the trail of tool activity the remote service performed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub response_id: String,
    pub model: String,
    pub items: Vec<ResponseContent>,
    pub tool_activity: Vec<ToolActivity>,
}

impl AnalysisResponse {
    pub fn new(response_id: String, model: String) -> Self {
        Self {
            response_id,
            model,
            items: Vec::new(),
            tool_activity: Vec::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn text_items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            ResponseContent::Text(text) => Some(text.as_str()),
            ResponseContent::Image { .. } => None,
        })
    }

    pub fn image_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ResponseContent::Image { .. }))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseContent {
    Text(String),
    Image {
        bytes: Vec<u8>,
        filename: Option<String>,
    },
}

/// One tool-protocol step observed in the reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolActivity {
    pub server_label: String,
    pub detail: String,
}

impl ToolActivity {
    pub fn new(server_label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            server_label: server_label.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials {
            api_key: "sk-test".to_string(),
            authorization: "av-test".to_string(),
            server_url: "https://mcp.example.com/mcp".to_string(),
        }
    }

    #[test]
    fn test_request_embeds_mcp_descriptor() {
        let request = AnalysisRequest::new(
            "gpt-5-mini".to_string(),
            "analyze AAPL".to_string(),
            &test_credentials(),
        );

        assert_eq!(request.mcp_server.server_label, MCP_SERVER_LABEL);
        assert_eq!(request.mcp_server.server_url, "https://mcp.example.com/mcp");
        assert_eq!(request.mcp_server.authorization, "av-test");
    }

    #[test]
    fn test_response_content_accessors() {
        let mut response = AnalysisResponse::new("resp_1".to_string(), "gpt-5-mini".to_string());
        assert!(!response.has_content());

        response.items.push(ResponseContent::Text("up 2%".to_string()));
        response.items.push(ResponseContent::Image {
            bytes: vec![0x89, 0x50],
            filename: Some("chart.png".to_string()),
        });

        assert!(response.has_content());
        assert_eq!(response.text_items().collect::<Vec<_>>(), vec!["up 2%"]);
        assert_eq!(response.image_count(), 1);
    }
}
