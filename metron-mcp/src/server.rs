//! Request handling - JSON-RPC methods, tools and resources

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};
use metron_core::QuantaError;
use metron_serde::{Codec, SchemaSet, WireConfig};
use metron_units::{Kind, Quantity, Unit, ABBREVIATIONS};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "metron";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const SCHEMAS_URI: &str = "metron://schemas";
const SCHEMA_URI_PREFIX: &str = "metron://schemas/";

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }

    fn rejected(err: &QuantaError) -> Self {
        McpError {
            code: -32602,
            message: err.to_string(),
            data: serde_json::to_value(err.to_rejection()).ok(),
        }
    }
}

/// Failure of a tool call: a protocol problem, or input the library rejected
enum ToolError {
    Protocol(McpError),
    Rejected(QuantaError),
}

impl From<QuantaError> for ToolError {
    fn from(err: QuantaError) -> Self {
        ToolError::Rejected(err)
    }
}

impl From<McpError> for ToolError {
    fn from(err: McpError) -> Self {
        ToolError::Protocol(err)
    }
}

/// Shared, read-only state of a running server
pub struct Server {
    config: WireConfig,
    codec: Codec,
    schemas: Arc<SchemaSet>,
}

impl Server {
    pub fn new(config: WireConfig, schemas: Arc<SchemaSet>) -> Self {
        let codec = config.codec();
        Server { config, codec, schemas }
    }

    /// Handle one protocol line; `None` for notifications
    pub fn handle_line(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                let response = self.handle_request(&request);
                // Notifications (no id) should NOT receive a response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    return None;
                }
                response
            }
            Err(e) => {
                warn!(error = %e, "error parsing request");
                McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: None,
                    result: None,
                    error: Some(McpError { code: -32700, message: format!("Parse error: {}", e), data: None }),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "error serializing response");
                Some(r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Internal error"}}"#.to_string())
            }
        }
    }

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => self.handle_initialize(&request.params),
            "initialized" => Ok(json!({})),
            "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request.params),

            // Resources
            "resources/list" => self.handle_resources_list(),
            "resources/read" => self.handle_resources_read(&request.params),

            _ => Err(McpError {
                code: -32601,
                message: format!("Method not found: {}", request.method),
                data: None,
            }),
        };

        match result {
            Ok(r) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id.clone(),
                result: Some(r),
                error: None,
            },
            Err(e) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id.clone(),
                result: None,
                error: Some(e),
            },
        }
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let client_info = params.as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        // Use client's protocol version for compatibility
        let client_protocol = params.as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str())
            .unwrap_or(PROTOCOL_VERSION);

        info!(client = client_info, protocol = client_protocol, "client connected");

        Ok(json!({
            "protocolVersion": client_protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Physical quantities as JSON, with schemas for every quantity kind"
            },
            "capabilities": {
                "tools": {
                    "listChanged": false
                },
                "resources": {
                    "subscribe": false,
                    "listChanged": false
                }
            },
            "instructions": format!(
                "Quantities are written in the {} wire format. Use 'list_kinds' to explore kinds and units, \
                 'encode'/'decode' to move between numbers and JSON, and read {} for the schemas.",
                self.config.format, SCHEMAS_URI
            )
        }))
    }

    fn open_schema(&self) -> Result<JsonValue, McpError> {
        self.schemas
            .open()
            .ok_or_else(|| McpError::invalid_params("open quantity schema missing"))?
            .to_json()
            .map_err(|e| McpError::rejected(&e))
    }

    fn handle_tools_list(&self) -> Result<JsonValue, McpError> {
        let quantity = self.open_schema()?;

        Ok(json!({
            "tools": [
                {
                    "name": "encode",
                    "description": "Encode a magnitude and unit as a quantity in the configured wire format.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "kind": {
                                "type": "string",
                                "description": "Quantity kind, e.g. Mass"
                            },
                            "unit": {
                                "type": "string",
                                "description": "Unit name (Kilogram) or abbreviation (kg)"
                            },
                            "value": {
                                "type": "number",
                                "description": "Magnitude in the unit"
                            }
                        },
                        "required": ["kind", "unit", "value"]
                    }
                },
                {
                    "name": "decode",
                    "description": "Decode a quantity from the configured wire format.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "quantity": quantity,
                            "kind": {
                                "type": "string",
                                "description": "Expected kind. Omit to accept any kind."
                            }
                        },
                        "required": ["quantity"]
                    }
                },
                {
                    "name": "convert",
                    "description": "Convert a quantity to another unit of the same kind.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "quantity": quantity,
                            "kind": {
                                "type": "string",
                                "description": "Expected kind. Omit to accept any kind."
                            },
                            "target": {
                                "type": "string",
                                "description": "Target unit name or abbreviation"
                            }
                        },
                        "required": ["quantity", "target"]
                    }
                },
                {
                    "name": "list_kinds",
                    "description": "List quantity kinds with their units and abbreviations.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "kind": {
                                "type": "string",
                                "description": "Show a single kind"
                            }
                        }
                    }
                }
            ]
        }))
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        let result = match name {
            "encode" => self.tool_encode(&args),
            "decode" => self.tool_decode(&args),
            "convert" => self.tool_convert(&args),
            "list_kinds" => self.tool_list_kinds(&args),
            _ => return Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        };

        match result {
            Ok(value) => Ok(value),
            Err(ToolError::Protocol(e)) => Err(e),
            Err(ToolError::Rejected(e)) => {
                warn!(tool = name, code = e.code(), error = %e, "input rejected");
                Ok(json!({
                    "content": [{ "type": "text", "text": e.to_string() }],
                    "rejection": e.to_rejection(),
                    "isError": true
                }))
            }
        }
    }

    /// Optional `kind` argument
    fn kind_arg(args: &JsonValue) -> Result<Option<Kind>, ToolError> {
        match args.get("kind") {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(name)) => Ok(Some(Kind::from_name(name)?)),
            Some(other) => Err(McpError::invalid_params(format!("kind must be a string, got {}", other)).into()),
        }
    }

    /// Unit of `kind` by canonical name, or by abbreviation in the codec's culture
    fn unit_arg(&self, kind: Kind, text: &str) -> Result<Unit, QuantaError> {
        kind.unit_named(text).or_else(|err| {
            ABBREVIATIONS.lookup(kind, text, self.codec.culture()).map_err(|_| err)
        })
    }

    /// The `quantity` argument, given either as a JSON object or as JSON text
    fn quantity_arg(&self, args: &JsonValue, kind: Option<Kind>) -> Result<Quantity, ToolError> {
        let quantity = args.get("quantity")
            .ok_or_else(|| McpError::invalid_params("Missing quantity argument"))?;

        let quantity = match quantity {
            JsonValue::String(text) => {
                let value: JsonValue = serde_json::from_str(text).map_err(QuantaError::malformed)?;
                self.codec.from_value(&value, kind)?
            }
            value => self.codec.from_value(value, kind)?,
        };
        Ok(quantity)
    }

    fn encoded_result(&self, quantity: &Quantity) -> Result<JsonValue, ToolError> {
        let text = self.codec.encode(quantity)?;
        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "quantity": self.codec.to_value(quantity)?
        }))
    }

    fn tool_encode(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let kind = Self::kind_arg(args)?
            .ok_or_else(|| McpError::invalid_params("Missing kind argument"))?;
        let unit = args.get("unit")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing unit argument"))?;
        let value = args.get("value")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| McpError::invalid_params("Missing or non-numeric value argument"))?;

        let quantity = Quantity::new(value, self.unit_arg(kind, unit)?);
        self.encoded_result(&quantity)
    }

    fn tool_decode(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let kind = Self::kind_arg(args)?;
        let quantity = self.quantity_arg(args, kind)?;

        Ok(json!({
            "content": [{ "type": "text", "text": format!("{} ({})", quantity, quantity.kind()) }],
            "kind": quantity.kind().name(),
            "unit": quantity.unit().name(),
            "abbreviation": quantity.unit().abbreviation_for(self.codec.culture()),
            "value": quantity.value(),
            "baseValue": quantity.base_value(),
            "baseUnit": quantity.kind().base_unit().name()
        }))
    }

    fn tool_convert(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let kind = Self::kind_arg(args)?;
        let target = args.get("target")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing target argument"))?;

        let quantity = self.quantity_arg(args, kind)?;
        let target = self.unit_arg(quantity.kind(), target)?;
        let converted = quantity.convert_to(target)?;
        self.encoded_result(&converted)
    }

    fn tool_list_kinds(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let kinds: Vec<Kind> = match Self::kind_arg(args)? {
            Some(kind) => vec![kind],
            None => Kind::ALL.to_vec(),
        };
        let culture = self.codec.culture();

        let listed: Vec<JsonValue> = kinds.iter().map(|&kind| {
            json!({
                "kind": kind.name(),
                "description": kind.description(),
                "dimension": kind.dimension().to_string(),
                "baseUnit": kind.base_unit().name(),
                "derivable": kind.is_derivable(),
                "units": kind.units().map(|u| json!({
                    "name": u.name(),
                    "abbreviations": u.abbreviations(culture)
                })).collect::<Vec<_>>()
            })
        }).collect();

        let summary = kinds.iter()
            .map(|k| format!("{} ({})", k.name(), k.base_unit().abbreviation_for(culture)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(json!({
            "content": [{ "type": "text", "text": summary }],
            "kinds": listed
        }))
    }

    fn handle_resources_list(&self) -> Result<JsonValue, McpError> {
        let mut resources = vec![json!({
            "uri": SCHEMAS_URI,
            "name": "schemas",
            "description": format!("All quantity schemas ({} format)", self.schemas.format()),
            "mimeType": "application/json"
        })];

        resources.extend(self.schemas.iter().map(|(key, descriptor)| {
            json!({
                "uri": format!("{}{}", SCHEMA_URI_PREFIX, key.name()),
                "name": key.name(),
                "description": descriptor.description,
                "mimeType": "application/json"
            })
        }));

        Ok(json!({ "resources": resources }))
    }

    fn handle_resources_read(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let uri = params.as_ref()
            .and_then(|p| p.get("uri"))
            .and_then(|u| u.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing uri parameter"))?;

        let document = if uri == SCHEMAS_URI {
            serde_json::to_string_pretty(&*self.schemas)
        } else {
            let name = uri.strip_prefix(SCHEMA_URI_PREFIX).ok_or_else(|| {
                McpError::invalid_params(format!(
                    "Invalid URI: {}. Expected {} or {}{{name}}",
                    uri, SCHEMAS_URI, SCHEMA_URI_PREFIX
                ))
            })?;
            let descriptor = self.schemas.by_name(name).map_err(|e| McpError::rejected(&e))?;
            serde_json::to_string_pretty(descriptor)
        };
        let text = document.map_err(|e| McpError::rejected(&QuantaError::malformed(e)))?;

        Ok(json!({
            "contents": [{
                "uri": uri,
                "mimeType": "application/json",
                "text": text
            }]
        }))
    }
}
