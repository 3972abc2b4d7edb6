//! Pinata pinning service client.

use super::{MetadataStore, TokenMetadataDocument};
use crate::error::LaunchpadError;
use serde::Deserialize;

const API_BASE: &str = "https://api.pinata.cloud";
const DEFAULT_GATEWAY: &str = "https://gateway.pinata.cloud";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PinResponse {
    ipfs_hash: String,
}

/// IPFS pinning via Pinata's REST API, authenticated with an API key pair.
pub struct PinataClient {
    api_key: String,
    secret_api_key: String,
    gateway: String,
    http: reqwest::Client,
}

impl PinataClient {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
            gateway: DEFAULT_GATEWAY.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Use a dedicated gateway instead of the public one.
    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = gateway.into();
        self
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_api_key)
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<PinResponse, LaunchpadError> {
        match response.status().as_u16() {
            401 | 403 => Err(LaunchpadError::AuthenticationFailed),
            status if !response.status().is_success() => Err(LaunchpadError::ServiceUnavailable(
                format!("pinata returned HTTP {}", status),
            )),
            _ => response
                .json()
                .await
                .map_err(|e| LaunchpadError::ServiceUnavailable(e.to_string())),
        }
    }

    /// Check the configured credentials against Pinata's test endpoint.
    pub async fn test_authentication(&self) -> Result<bool, LaunchpadError> {
        let response = self
            .authed(self.http.get(format!("{}/data/testAuthentication", API_BASE)))
            .send()
            .await
            .map_err(|e| LaunchpadError::ServiceUnavailable(e.to_string()))?;
        Ok(response.status().is_success())
    }

    /// Resolve a pin result to a fetchable URL on the configured gateway.
    ///
    /// Accepts a bare hash, an `ipfs://` URI, or an already-complete URL.
    pub fn gateway_url(&self, uri_or_hash: &str) -> String {
        if uri_or_hash.starts_with("http://") || uri_or_hash.starts_with("https://") {
            return uri_or_hash.to_string();
        }
        let hash = uri_or_hash.strip_prefix("ipfs://").unwrap_or(uri_or_hash);
        format!("{}/ipfs/{}", self.gateway, hash)
    }
}

impl MetadataStore for PinataClient {
    async fn upload_asset(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, LaunchpadError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("asset")
            .mime_str(content_type)
            .map_err(|e| LaunchpadError::ServiceUnavailable(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .authed(self.http.post(format!("{}/pinning/pinFileToIPFS", API_BASE)))
            .multipart(form)
            .send()
            .await
            .map_err(|e| LaunchpadError::ServiceUnavailable(e.to_string()))?;
        let pinned = self.handle_response(response).await?;
        Ok(self.gateway_url(&pinned.ipfs_hash))
    }

    async fn upload_json(
        &self,
        document: &TokenMetadataDocument,
    ) -> Result<String, LaunchpadError> {
        let response = self
            .authed(self.http.post(format!("{}/pinning/pinJSONToIPFS", API_BASE)))
            .json(document)
            .send()
            .await
            .map_err(|e| LaunchpadError::ServiceUnavailable(e.to_string()))?;
        let pinned = self.handle_response(response).await?;
        Ok(self.gateway_url(&pinned.ipfs_hash))
    }
}
