//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes readability analysis over the MCP protocol, making it available to
//! AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method delegates to core library
//! functions rather than implementing business logic directly.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use clarity_meter_core::{AnalysisError, Metric, analyze_report, validate_input_size};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze (at least 10 characters after trimming).
    pub text: String,
    /// Metric to foreground: clarity_index, gunning_fog, infogineering_index,
    /// flesch_reading_ease or flesch_kincaid_grade. Defaults to the server's
    /// configured metric.
    pub metric: Option<String>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `list_metrics` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListMetricsParams {}

/// MCP server exposing readability analysis to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_metric: Metric,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectServer {
    /// Limit accepted text to `max_bytes`, or remove the limit with `None`.
    #[must_use]
    pub const fn with_max_input_bytes(mut self, max_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_bytes;
        self
    }

    /// Metric used when a call does not name one.
    #[must_use]
    pub const fn with_default_metric(mut self, metric: Metric) -> Self {
        self.default_metric = metric;
        self
    }
}

/// Map a core analysis error onto an MCP error.
///
/// Every analysis failure is caused by the caller's arguments.
fn to_mcp_error(err: &AnalysisError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(clarity_meter_core::DEFAULT_MAX_INPUT_BYTES),
            default_metric: Metric::default(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compute readability metrics for a text.
    #[tool(
        description = "Analyze text readability. Returns word, sentence, syllable, complex-word, long-word and paragraph counts plus Clarity Index, Gunning Fog, Infogineering, Flesch Reading Ease and Flesch-Kincaid Grade scores, with the selected metric's target band and assessment."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            metric = ?params.metric,
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let metric = match params.metric.as_deref() {
            Some(key) => key.parse::<Metric>().map_err(|e| to_mcp_error(&e))?,
            None => self.default_metric,
        };
        validate_input_size(&params.text, self.max_input_bytes).map_err(|e| to_mcp_error(&e))?;

        let report = analyze_report(&params.text, metric, params.strip_markdown)
            .map_err(|e| to_mcp_error(&e))?;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_text",
            metric = %report.selected_metric,
            score = report.score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the selectable metrics.
    #[tool(description = "List the selectable readability metrics with their formulas and target bands.")]
    #[tracing::instrument(skip_all, fields(otel.kind = "server"))]
    fn list_metrics(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ListMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_metrics", "executing MCP tool");

        let json = serde_json::to_string_pretty(&Metric::catalog())
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "list_metrics", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text to score prose readability; \
                 list_metrics describes the available metrics.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
