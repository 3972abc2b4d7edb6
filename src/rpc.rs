//! Chain RPC boundary.
//!
//! [`ChainRpc`] is the narrow contract the builders and the submission flow
//! need from a Solana JSON-RPC node. [`HttpRpc`] is the production
//! implementation over `reqwest`; tests substitute in-memory fakes.

use crate::error::LaunchpadError;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use solana_sdk::hash::Hash;

/// A recent block reference: the blockhash to embed in a transaction and
/// the last block height at which that hash is still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Observed status of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    /// The transaction executed successfully at or above confirmed
    /// commitment.
    Confirmed,
    /// The transaction executed and failed; carries the remote error text.
    Failed(String),
    /// The node has no record of the signature (yet).
    Unknown,
}

/// The chain queries this crate performs.
///
/// Exactly four operations: everything else the builders need is computed
/// locally. Errors are [`LaunchpadError::NetworkUnavailable`] for transport
/// failures and [`LaunchpadError::SubmissionFailed`] when the node actively
/// rejects a submission.
#[allow(async_fn_in_trait)]
pub trait ChainRpc {
    /// Latest blockhash at confirmed commitment, with its expiry height.
    async fn latest_block_ref(&self) -> Result<BlockRef, LaunchpadError>;

    /// Minimum lamport balance making an account of `space` bytes
    /// rent-exempt.
    async fn minimum_balance_for_rent_exemption(
        &self,
        space: usize,
    ) -> Result<u64, LaunchpadError>;

    /// Submit a fully signed wire-encoded transaction. Returns the
    /// transaction signature in base58.
    async fn send_transaction(&self, wire: &[u8]) -> Result<String, LaunchpadError>;

    /// Look up the status of a signature, searching transaction history.
    async fn transaction_status(&self, signature: &str) -> Result<TxStatus, LaunchpadError>;
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatestBlockhashValue {
    blockhash: String,
    last_valid_block_height: u64,
}

#[derive(Debug, Deserialize)]
struct SignatureStatusValue {
    err: Option<serde_json::Value>,
}

/// JSON-RPC client over HTTP.
pub struct HttpRpc {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRpc {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, LaunchpadError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response: RpcResponse<T> = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| LaunchpadError::NetworkUnavailable(e.to_string()))?
            .json()
            .await
            .map_err(|e| LaunchpadError::NetworkUnavailable(e.to_string()))?;

        if let Some(err) = response.error {
            // sendTransaction rejections come back as RPC errors; every
            // other method only errors when the node itself is unhealthy.
            return Err(match method {
                "sendTransaction" => LaunchpadError::SubmissionFailed(err.message),
                _ => LaunchpadError::NetworkUnavailable(err.message),
            });
        }
        response.result.ok_or_else(|| {
            LaunchpadError::NetworkUnavailable(format!("{}: empty RPC response", method))
        })
    }
}

impl ChainRpc for HttpRpc {
    async fn latest_block_ref(&self) -> Result<BlockRef, LaunchpadError> {
        let result: WithContext<LatestBlockhashValue> = self
            .call(
                "getLatestBlockhash",
                json!([{ "commitment": "confirmed" }]),
            )
            .await?;
        let blockhash: Hash = result.value.blockhash.parse().map_err(|_| {
            LaunchpadError::NetworkUnavailable(format!(
                "unparseable blockhash: {}",
                result.value.blockhash
            ))
        })?;
        Ok(BlockRef {
            blockhash,
            last_valid_block_height: result.value.last_valid_block_height,
        })
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        space: usize,
    ) -> Result<u64, LaunchpadError> {
        self.call("getMinimumBalanceForRentExemption", json!([space]))
            .await
    }

    async fn send_transaction(&self, wire: &[u8]) -> Result<String, LaunchpadError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(wire);
        self.call(
            "sendTransaction",
            json!([encoded, { "encoding": "base64", "preflightCommitment": "confirmed" }]),
        )
        .await
    }

    async fn transaction_status(&self, signature: &str) -> Result<TxStatus, LaunchpadError> {
        let result: WithContext<Vec<Option<SignatureStatusValue>>> = self
            .call(
                "getSignatureStatuses",
                json!([[signature], { "searchTransactionHistory": true }]),
            )
            .await?;
        Ok(match result.value.into_iter().next().flatten() {
            None => TxStatus::Unknown,
            Some(SignatureStatusValue { err: Some(err) }) => TxStatus::Failed(err.to_string()),
            Some(SignatureStatusValue { err: None }) => TxStatus::Confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_blockhash_response_parses() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "slot": 100 },
                "value": {
                    "blockhash": "4sGjMW1sUnHzSxGspuhpqLDx6wiyjNtZAMdL4VZHirAn",
                    "lastValidBlockHeight": 3090
                }
            }
        }"#;
        let response: RpcResponse<WithContext<LatestBlockhashValue>> =
            serde_json::from_str(raw).unwrap();
        let value = response.result.unwrap().value;
        assert_eq!(value.last_valid_block_height, 3090);
        assert!(value.blockhash.parse::<Hash>().is_ok());
    }

    #[test]
    fn signature_statuses_distinguish_outcomes() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "slot": 100 },
                "value": [
                    null,
                    { "err": null, "confirmationStatus": "confirmed" },
                    { "err": { "InstructionError": [0, "Custom"] } }
                ]
            }
        }"#;
        let response: RpcResponse<WithContext<Vec<Option<SignatureStatusValue>>>> =
            serde_json::from_str(raw).unwrap();
        let value = response.result.unwrap().value;
        assert!(value[0].is_none());
        assert!(value[1].as_ref().unwrap().err.is_none());
        assert!(value[2].as_ref().unwrap().err.is_some());
    }

    #[test]
    fn rpc_error_response_parses() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32002, "message": "Transaction simulation failed" }
        }"#;
        let response: RpcResponse<String> = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        assert_eq!(
            response.error.unwrap().message,
            "Transaction simulation failed"
        );
    }
}
