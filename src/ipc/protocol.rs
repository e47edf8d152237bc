use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExplorerError, Result};
use crate::schema::descriptor::ModelType;

pub const JSONRPC_VERSION: &str = "2.0";
pub const GET_DESCRIPTORS: &str = "data/get/descriptors";

#[derive(Serialize, Debug)]
pub struct Request<P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P: Serialize> Request<P> {
    pub fn new(id: u64, method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Parameters of `data/get/descriptors`.
#[derive(Serialize, Debug)]
pub struct TypeRef {
    #[serde(rename = "@type")]
    pub model_type: ModelType,
}

#[derive(Deserialize, Debug)]
pub struct Response {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl Response {
    /// Either the decoded `result` or the server's error. A response with
    /// neither member decodes as if the result were `null`.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T> {
        if let Some(e) = self.error {
            return Err(ExplorerError::Rpc {
                code: e.code,
                message: e.message,
            });
        }

        serde_json::from_value(self.result.unwrap_or(Value::Null)).map_err(ExplorerError::Decode)
    }
}
