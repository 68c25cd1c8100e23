//! The MCP service: lists the tool catalog and routes `tools/call` into a
//! [`Toolbox`].
//!
//! `rmcp` owns the JSON-RPC framing, the `initialize` handshake and
//! protocol-level errors. Tool failures never surface as JSON-RPC errors;
//! they come back as results with `isError` set.

// Use 3rd party
use log::debug;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value;

// Use local
use crate::tools::Toolbox;

pub const SERVER_NAME: &str = "deezer-api-server";

const INSTRUCTIONS: &str = "Deezer catalog lookups. Use search_* for ranked lists, \
                            get_* when the Deezer ID is known, find_* to resolve one best match by name, \
                            and the *_by_artist / *_by_creator tools to narrow a search by a second name.";

pub struct DeezerServer {
    toolbox: Toolbox,
}

impl DeezerServer {
    pub fn new(toolbox: Toolbox) -> Self {
        Self { toolbox }
    }
}

impl ServerHandler for DeezerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_owned()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.toolbox.catalog()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!("tools/call {}", request.name);
        let arguments = Value::Object(request.arguments.unwrap_or_default());
        Ok(self.toolbox.call(request.name.as_ref(), &arguments).await)
    }
}
