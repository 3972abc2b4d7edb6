//! Types for token-launch transaction building.
//!
//! Deserializable from JavaScript with camelCase keys, matching the shapes
//! the front-end forms produce.

use serde::Deserialize;

/// Which authorities to revoke at creation time.
///
/// Revocation is permanent: a revoked authority is set to none and there is
/// no undo. The flags drive both the fee total (mint and freeze only) and
/// which instructions are appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevokeOptions {
    pub mint_authority: bool,
    pub freeze_authority: bool,
    pub update_authority: bool,
}

/// A request to create a token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIntent {
    pub name: String,
    pub symbol: String,
    /// Decimal precision of the mint.
    pub decimals: u8,
    /// Initial supply in whole tokens, as a decimal string. Scaled by
    /// 10^decimals at build time; any fractional remainder is floored.
    pub supply: String,
    #[serde(default)]
    pub revoke: RevokeOptions,
    /// Off-chain metadata URI. When absent, no metadata record is created.
    #[serde(default)]
    pub metadata_uri: Option<String>,
}
