mod builder;
mod fees;

pub use builder::BuilderNamespace;
pub use fees::FeesNamespace;

use crate::config::{Config, FeeSchedule, Network};
use crate::error::LaunchpadError;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use wasm_bindgen::prelude::*;

/// Launch parameters shared by the WASM entry points.
///
/// Network-derived values (`mint_rent_lamports`) are supplied by the
/// JavaScript caller, which owns the RPC connection in the browser.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LaunchParams {
    pub fee_payer: String,
    pub fee_receiver: String,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub rpc_url: Option<String>,
    #[serde(default)]
    pub fees: Option<FeeSchedule>,
    /// Rent-exemption minimum for a mint account, pre-fetched by the caller.
    #[serde(default)]
    pub mint_rent_lamports: Option<u64>,
}

impl LaunchParams {
    pub(crate) fn parse(value: JsValue) -> Result<Self, JsValue> {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse launch params: {}", e)))
    }

    pub(crate) fn config(&self) -> Result<Config, LaunchpadError> {
        Config::new(
            self.network.unwrap_or(Network::Devnet),
            self.rpc_url.clone(),
            parse_pubkey(&self.fee_receiver)?,
            self.fees.clone().unwrap_or_default(),
        )
    }

    pub(crate) fn payer(&self) -> Result<Pubkey, LaunchpadError> {
        parse_pubkey(&self.fee_payer)
    }
}

fn parse_pubkey(address: &str) -> Result<Pubkey, LaunchpadError> {
    address
        .parse()
        .map_err(|_| LaunchpadError::Config(format!("invalid address: {}", address)))
}
