use serde::{Deserialize, Serialize};

/// The parts of an OpenAPI operation object used to build code samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiOperation {
    #[serde(rename = "operationId", alias = "operation_id", default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Example JSON payload for operations that take a request body.
    #[serde(default)]
    pub request_body_example: Option<serde_json::Value>,
}
