//! Wire types for the OpenAI Responses API.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: String,
    pub tools: Vec<ToolConfig>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolConfig {
    Mcp {
        server_label: String,
        server_description: String,
        server_url: String,
        authorization: String,
        require_approval: String,
    },
    CodeInterpreter {
        container: ContainerConfig,
    },
}

#[derive(Serialize)]
pub struct ContainerConfig {
    #[serde(rename = "type")]
    pub container_type: String,
}

#[derive(Deserialize)]
pub struct ResponsesReply {
    pub id: String,
    pub model: String,
    pub status: String,
    #[serde(default)]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub error: Option<ReplyError>,
}

#[derive(Deserialize)]
pub struct ReplyError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    McpListTools {
        server_label: String,
        #[serde(default)]
        tools: Vec<McpToolInfo>,
    },
    McpCall {
        server_label: String,
        name: String,
        #[serde(default)]
        arguments: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    ImageGenerationCall {
        #[serde(default)]
        result: Option<String>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
pub struct McpToolInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText {
        text: String,
        #[serde(default)]
        annotations: Vec<Annotation>,
    },
    Refusal {
        refusal: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    ContainerFileCitation {
        container_id: String,
        file_id: String,
        #[serde(default)]
        filename: Option<String>,
    },
    #[serde(other)]
    Other,
}
