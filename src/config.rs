//! Launch configuration and the fee schedule.
//!
//! All pricing and addressing constants live in one immutable [`Config`]
//! value, constructed once at process start and passed by reference into
//! every builder call. Nothing in this crate reads global mutable state.

use crate::builder::types::RevokeOptions;
use crate::error::LaunchpadError;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Public devnet RPC endpoint, used when no explicit URL is configured.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Which cluster transactions are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Devnet,
}

/// Supported marketing placements.
///
/// A closed enumeration: every platform this crate can price is a variant,
/// and the only way an unrecognized name enters the system is through
/// [`Platform::from_str`], which rejects it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Tiktok,
    /// Chinese social media placement (Weibo et al.).
    Chinese,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Chinese => "chinese",
        }
    }
}

impl FromStr for Platform {
    type Err = LaunchpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(Self::Twitter),
            "instagram" => Ok(Self::Instagram),
            "tiktok" => Ok(Self::Tiktok),
            "chinese" => Ok(Self::Chinese),
            other => Err(LaunchpadError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Per-platform marketing prices in SOL. One field per [`Platform`] variant
/// so the mapping stays exhaustive.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketingFees {
    pub twitter: f64,
    pub instagram: f64,
    pub tiktok: f64,
    pub chinese: f64,
}

impl Default for MarketingFees {
    fn default() -> Self {
        Self {
            twitter: 0.25,
            instagram: 0.25,
            tiktok: 0.25,
            chinese: 0.4,
        }
    }
}

/// The static price table, denominated in SOL.
///
/// Converted to lamports only at instruction-build time, in one place
/// (`builder::transfer::sol_to_lamports`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeSchedule {
    /// Flat price of a token creation.
    pub creation_base: f64,
    /// Surcharge per revoked authority (mint and freeze only, see below).
    pub revoke_per_authority: f64,
    /// Marketing placement prices.
    pub marketing: MarketingFees,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            creation_base: 0.1,
            revoke_per_authority: 0.05,
            marketing: MarketingFees::default(),
        }
    }
}

impl FeeSchedule {
    /// Total price in SOL for a token creation with the given revoke flags.
    ///
    /// Only the mint-authority and freeze-authority flags are charged.
    /// Revoking the update authority changes the metadata instruction
    /// (`is_mutable = false`) but carries no surcharge; that asymmetry is the
    /// current pricing rule and is preserved here exactly.
    pub fn total_creation_fee(&self, revoke: &RevokeOptions) -> f64 {
        let mut total = self.creation_base;
        if revoke.mint_authority {
            total += self.revoke_per_authority;
        }
        if revoke.freeze_authority {
            total += self.revoke_per_authority;
        }
        total
    }

    /// Price in SOL of a marketing placement.
    pub fn marketing_fee(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Twitter => self.marketing.twitter,
            Platform::Instagram => self.marketing.instagram,
            Platform::Tiktok => self.marketing.tiktok,
            Platform::Chinese => self.marketing.chinese,
        }
    }

    /// String-keyed lookup for callers holding a platform name; fails with
    /// [`LaunchpadError::UnknownPlatform`] before any transaction is built.
    pub fn marketing_fee_by_name(&self, name: &str) -> Result<f64, LaunchpadError> {
        Ok(self.marketing_fee(name.parse()?))
    }

    fn validate(&self) -> Result<(), LaunchpadError> {
        let amounts = [
            self.creation_base,
            self.revoke_per_authority,
            self.marketing.twitter,
            self.marketing.instagram,
            self.marketing.tiktok,
            self.marketing.chinese,
        ];
        for amount in amounts {
            if !amount.is_finite() || amount < 0.0 {
                return Err(LaunchpadError::NegativeAmount(amount));
            }
        }
        Ok(())
    }
}

/// Immutable launch configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub network: Network,
    /// JSON-RPC endpoint for the selected network.
    pub rpc_url: String,
    /// Receiver of all service fees.
    pub fee_receiver: Pubkey,
    pub fees: FeeSchedule,
}

impl Config {
    /// Build a configuration, validating the fee schedule.
    ///
    /// `rpc_url` may be omitted on devnet (the public endpoint is used);
    /// mainnet always requires an explicit endpoint.
    pub fn new(
        network: Network,
        rpc_url: Option<String>,
        fee_receiver: Pubkey,
        fees: FeeSchedule,
    ) -> Result<Self, LaunchpadError> {
        fees.validate()?;
        let rpc_url = match (rpc_url, network) {
            (Some(url), _) => url,
            (None, Network::Devnet) => DEVNET_RPC_URL.to_string(),
            (None, Network::Mainnet) => {
                return Err(LaunchpadError::Config(
                    "mainnet requires an explicit RPC endpoint".to_string(),
                ))
            }
        };
        Ok(Self {
            network,
            rpc_url,
            fee_receiver,
            fees,
        })
    }

    /// Read the configuration from the environment:
    /// `LAUNCHPAD_NETWORK` (`mainnet`/`devnet`, default devnet),
    /// `LAUNCHPAD_RPC_URL` (optional on devnet), `LAUNCHPAD_FEE_RECEIVER`.
    pub fn from_env() -> Result<Self, LaunchpadError> {
        let network = match std::env::var("LAUNCHPAD_NETWORK").ok().as_deref() {
            None | Some("devnet") => Network::Devnet,
            Some("mainnet") => Network::Mainnet,
            Some(other) => {
                return Err(LaunchpadError::Config(format!(
                    "unknown network: {}",
                    other
                )))
            }
        };
        let rpc_url = std::env::var("LAUNCHPAD_RPC_URL").ok();
        let receiver = std::env::var("LAUNCHPAD_FEE_RECEIVER")
            .map_err(|_| LaunchpadError::Config("LAUNCHPAD_FEE_RECEIVER is not set".to_string()))?;
        let fee_receiver: Pubkey = receiver.parse().map_err(|_| {
            LaunchpadError::Config(format!("invalid fee receiver address: {}", receiver))
        })?;
        Self::new(network, rpc_url, fee_receiver, FeeSchedule::default())
    }
}
