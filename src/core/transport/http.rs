//! HTTP transport implementation.
//!
//! Serves MCP as plain JSON-RPC 2.0 over `POST`, one request per call and no
//! session. Handy for poking at the solver tools with curl.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::SERVER_INSTRUCTIONS;
use crate::domains::prompts::string_arguments;
use crate::domains::tools::ToolRegistry;

/// Protocol version answered to `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Incoming JSON-RPC message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outgoing JSON-RPC message; exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl JsonRpcResponse {
    fn from_outcome(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    tools: Arc<ToolRegistry>,
    rpc_path: String,
}

impl AppState {
    fn new(server: McpServer, rpc_path: impl Into<String>) -> Self {
        let tools = Arc::new(ToolRegistry::new(server.solver().clone()));
        Self {
            server,
            tools,
            rpc_path: rpc_path.into(),
        }
    }
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind and serve until axum stops.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let state = AppState::new(server, self.config.rpc_path.as_str());

        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        if self.config.enable_cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - JSON-RPC at POST http://{}{} (CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "solver_base_url": state.server.solver().base_url(),
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "tools": state.tools.tool_names(),
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Notifications are acknowledged with `202 Accepted` and an empty body.
#[instrument(skip_all, fields(method = %request.method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    match process_request(&state, request).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Answer a single JSON-RPC message; notifications (no `id`) get no reply.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let JsonRpcRequest {
        jsonrpc,
        id,
        method,
        params,
    } = request;

    let outcome = if jsonrpc != "2.0" {
        Err(JsonRpcError::new(INVALID_REQUEST, "Invalid Request"))
    } else {
        dispatch(state, &method, params.unwrap_or(Value::Null)).await
    };

    if let Err(err) = &outcome {
        warn!("{} failed: {}", method, err.message);
    }
    id.map(|id| JsonRpcResponse::from_outcome(Some(id), outcome))
}

async fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, JsonRpcError> {
    info!("Handling {}", method);
    let server = &state.server;

    match method {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {}, "resources": {}, "prompts": {} },
            "serverInfo": { "name": server.name(), "version": server.version() },
            "instructions": SERVER_INSTRUCTIONS
        })),
        "ping" => Ok(json!({})),

        "tools/list" => Ok(json!({ "tools": server.tools() })),
        "tools/call" => {
            let name = required_str(&params, "name")?;
            let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
            state
                .tools
                .call_tool(name, arguments)
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        }

        "resources/list" => Ok(json!({ "resources": server.resources().list_resources().await })),
        "resources/templates/list" => Ok(json!({
            "resourceTemplates": server.resources().list_resource_templates().await
        })),
        "resources/read" => {
            let uri = required_str(&params, "uri")?;
            let result = server
                .resources()
                .read_resource(uri)
                .await
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;
            to_result(&result)
        }

        "prompts/list" => Ok(json!({ "prompts": server.prompts().list_prompts().await })),
        "prompts/get" => {
            let name = required_str(&params, "name")?;
            let arguments = params
                .get("arguments")
                .and_then(Value::as_object)
                .map(string_arguments);
            let result = server
                .prompts()
                .get_prompt(name, arguments)
                .await
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;
            to_result(&result)
        }

        notification if notification.starts_with("notifications/") => {
            debug!("Ignoring notification {}", notification);
            Ok(Value::Null)
        }

        _ => Err(JsonRpcError::new(METHOD_NOT_FOUND, "Method not found")),
    }
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}'", key)))
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::new(-32603, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::solver::SolverService;
    use crate::domains::solver::launcher::testing::RecordingLauncher;

    fn test_state() -> AppState {
        let config = Config::default();
        let solver = Arc::new(SolverService::with_launcher(
            config.solver.base_url.clone(),
            Arc::new(RecordingLauncher::default()),
        ));
        AppState::new(McpServer::with_solver(config, solver), "/mcp")
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    async fn respond(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
        process_request(state, request)
            .await
            .expect("requests with an id get a response")
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = respond(&test_state(), request("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "rubik-solver-mcp");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response.id, Some(json!(1)));
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = respond(&test_state(), request("tools/list", None)).await;
        let tools = response.result.unwrap()["tools"].as_array().unwrap().len();
        assert_eq!(tools, 4);
    }

    #[tokio::test]
    async fn test_tools_call_generate_url() {
        let params = json!({
            "name": "generate_solver_url",
            "arguments": { "speed": 2, "moves": "R U" }
        });
        let response = respond(&test_state(), request("tools/call", Some(params))).await;
        let result = response.result.unwrap();
        assert_eq!(
            result["content"][0]["text"],
            "http://localhost:8000/rubik.html?speed=2&moves=R+U"
        );
    }

    #[tokio::test]
    async fn test_tools_call_missing_name() {
        let response =
            respond(&test_state(), request("tools/call", Some(json!({})))).await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let params = json!({ "name": "scramble" });
        let response = respond(&test_state(), request("tools/call", Some(params))).await;
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert_eq!(error.message, "Unknown tool: scramble");
    }

    #[tokio::test]
    async fn test_resources_read_parameter_template() {
        let params = json!({ "uri": "rubik://solver/parameters/speed" });
        let response =
            respond(&test_state(), request("resources/read", Some(params))).await;
        let result = response.result.unwrap();
        assert!(result["contents"][0]["text"].as_str().unwrap().contains("speed"));
    }

    #[tokio::test]
    async fn test_prompts_get_missing_argument() {
        let params = json!({ "name": "scramble_and_solve", "arguments": {} });
        let response = respond(&test_state(), request("prompts/get", Some(params))).await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let mut req = request("tools/list", None);
        req.jsonrpc = "1.0".to_string();
        let response = respond(&test_state(), req).await;
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_notification_gets_empty_accepted() {
        let notification = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: None,
        };
        assert!(process_request(&test_state(), notification.clone()).await.is_none());

        let response = handle_rpc(State(test_state()), Json(notification)).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_request_with_id_gets_json_body() {
        let response = handle_rpc(State(test_state()), Json(request("ping", None))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["result"], json!({}));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = respond(&test_state(), request("cube/spin", None)).await;
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }
}
