use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::amount::EthAmount;
use super::chain::parse_quantity;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

/// Minimal Ethereum JSON-RPC client over HTTP.
#[derive(Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };
        let response: RpcResponse = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        unwrap_response(response)
    }

    pub async fn get_balance(&self, account: &str) -> Result<EthAmount, Box<dyn std::error::Error + Send + Sync>> {
        let result = self
            .call("eth_getBalance", serde_json::json!([account, "latest"]))
            .await?;
        parse_balance(&result).map_err(Into::into)
    }
}

fn unwrap_response(response: RpcResponse) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = response.error {
        return Err(format!("RPC error {}: {}", err.code, err.message).into());
    }
    response.result.ok_or_else(|| "RPC response without result".into())
}

fn parse_balance(result: &Value) -> Result<EthAmount, String> {
    let raw = result
        .as_str()
        .ok_or_else(|| format!("Balance is not a string: {}", result))?;
    parse_quantity(raw).map(EthAmount::from_wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_getBalance",
            params: serde_json::json!(["0xAA", "latest"]),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_getBalance",
                "params": ["0xAA", "latest"]
            })
        );
    }

    #[test]
    fn test_balance_response() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0xde0b6b3a7640000"}"#).unwrap();
        let result = unwrap_response(response).unwrap();
        assert_eq!(parse_balance(&result).unwrap().to_significant(4), "1");
    }

    #[test]
    fn test_error_response() {
        let response: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid argument"}}"#,
        )
        .unwrap();
        let err = unwrap_response(response).unwrap_err();
        assert!(err.to_string().contains("invalid argument"));
    }

    #[test]
    fn test_non_string_balance_is_rejected() {
        assert!(parse_balance(&serde_json::json!(42)).is_err());
    }
}
