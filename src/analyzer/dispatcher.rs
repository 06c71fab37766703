use crate::api::{
    Annotation, ContainerConfig, ContentPart, OutputItem, ResponsesReply, ResponsesRequest,
    ToolConfig,
};
use crate::config;
use crate::error::KabuError;
use crate::models::{AnalysisRequest, AnalysisResponse, ResponseContent, ToolActivity};
use base64::Engine;
use std::future::Future;
use std::pin::Pin;

/// Seam between the pipeline and the remote LLM service. The production
/// implementation speaks HTTP; tests substitute a stub.
pub trait ResponseDispatcher: Send + Sync {
    fn dispatch<'a>(
        &'a self,
        request: &'a AnalysisRequest,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResponse, KabuError>> + Send + 'a>>;
}

pub struct HttpDispatcher {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl HttpDispatcher {
    /// Client defaults are used as-is: no retry layer, no timeout override.
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config::api_base(),
            api_key,
        }
    }

    fn build_wire_request(request: &AnalysisRequest) -> ResponsesRequest {
        ResponsesRequest {
            model: request.model.clone(),
            input: request.prompt.clone(),
            tools: vec![
                ToolConfig::Mcp {
                    server_label: request.mcp_server.server_label.clone(),
                    server_description: request.mcp_server.server_description.clone(),
                    server_url: request.mcp_server.server_url.clone(),
                    authorization: request.mcp_server.authorization.clone(),
                    require_approval: "never".to_string(),
                },
                ToolConfig::CodeInterpreter {
                    container: ContainerConfig {
                        container_type: "auto".to_string(),
                    },
                },
            ],
        }
    }

    async fn send_request(&self, request: &AnalysisRequest) -> Result<ResponsesReply, KabuError> {
        let wire = Self::build_wire_request(request);
        let url = format!("{}/responses", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&wire)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(classify_status(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        serde_json::from_str(&body)
            .map_err(|e| KabuError::InvalidResponse(format!("{} in body: {}", e, excerpt(&body))))
    }

    async fn convert_reply(&self, reply: ResponsesReply) -> Result<AnalysisResponse, KabuError> {
        if reply.status != "completed" {
            let detail = match reply.error {
                Some(err) => err.message,
                None => format!("response finished with status '{}'", reply.status),
            };
            return Err(KabuError::Api(detail));
        }

        let mut response = AnalysisResponse::new(reply.id, reply.model);

        for item in reply.output {
            match item {
                OutputItem::McpListTools {
                    server_label,
                    tools,
                } => {
                    let names = tools
                        .iter()
                        .map(|tool| tool.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    response
                        .tool_activity
                        .push(ToolActivity::new(server_label, format!("listed tools: {names}")));
                }
                OutputItem::McpCall {
                    server_label,
                    name,
                    arguments,
                    error,
                } => {
                    let detail = match error {
                        Some(err) => format!("call {name} failed: {err}"),
                        None => format!("called {}({})", name, arguments.unwrap_or_default()),
                    };
                    response
                        .tool_activity
                        .push(ToolActivity::new(server_label, detail));
                }
                OutputItem::Message { content } => {
                    for part in content {
                        match part {
                            ContentPart::OutputText { text, annotations } => {
                                if !text.trim().is_empty() {
                                    response.items.push(ResponseContent::Text(text));
                                }
                                for annotation in annotations {
                                    if let Annotation::ContainerFileCitation {
                                        container_id,
                                        file_id,
                                        filename,
                                    } = annotation
                                    {
                                        let bytes = self
                                            .fetch_container_file(&container_id, &file_id)
                                            .await?;
                                        response
                                            .items
                                            .push(ResponseContent::Image { bytes, filename });
                                    }
                                }
                            }
                            ContentPart::Refusal { refusal } => {
                                response
                                    .items
                                    .push(ResponseContent::Text(format!("Refused: {refusal}")));
                            }
                            ContentPart::Other => {}
                        }
                    }
                }
                OutputItem::ImageGenerationCall { result } => {
                    if let Some(encoded) = result {
                        let bytes = base64::engine::general_purpose::STANDARD
                            .decode(encoded.as_bytes())
                            .map_err(|e| {
                                KabuError::InvalidResponse(format!("bad image payload: {e}"))
                            })?;
                        response.items.push(ResponseContent::Image {
                            bytes,
                            filename: None,
                        });
                    }
                }
                OutputItem::Other => {}
            }
        }

        Ok(response)
    }

    /// Artifacts rendered by the code interpreter are only cited in the
    /// reply; the bytes live behind the containers endpoint.
    async fn fetch_container_file(
        &self,
        container_id: &str,
        file_id: &str,
    ) -> Result<Vec<u8>, KabuError> {
        let url = format!(
            "{}/containers/{}/files/{}/content",
            self.api_base, container_id, file_id
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(classify_status(status.as_u16(), &body));
        }

        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        Ok(bytes.to_vec())
    }
}

impl ResponseDispatcher for HttpDispatcher {
    fn dispatch<'a>(
        &'a self,
        request: &'a AnalysisRequest,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResponse, KabuError>> + Send + 'a>> {
        Box::pin(async move {
            let reply = self.send_request(request).await?;
            self.convert_reply(reply).await
        })
    }
}

fn classify_status(status: u16, body: &str) -> KabuError {
    let detail = format!("HTTP {}: {}", status, excerpt(body));
    match status {
        401 | 403 => KabuError::Authentication(detail),
        _ => KabuError::Api(detail),
    }
}

fn classify_transport_error(error: reqwest::Error) -> KabuError {
    if error.is_builder() {
        KabuError::Unexpected(error.to_string())
    } else if error.is_connect() || error.is_timeout() || error.is_request() {
        KabuError::Network(error.to_string())
    } else {
        KabuError::Unexpected(error.to_string())
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let head: String = trimmed.chars().take(200).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}
