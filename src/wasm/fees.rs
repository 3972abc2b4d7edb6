//! WASM binding for fee calculation.

use crate::builder::types::RevokeOptions;
use crate::config::FeeSchedule;
use wasm_bindgen::prelude::*;

/// Namespace for fee schedule operations.
#[wasm_bindgen]
pub struct FeesNamespace;

#[wasm_bindgen]
impl FeesNamespace {
    /// Total creation price in SOL for a set of revoke flags.
    ///
    /// `fees` may be undefined to use the default schedule. `revoke` is a
    /// JSON object with optional `mintAuthority`, `freezeAuthority` and
    /// `updateAuthority` booleans; only the first two affect the price.
    ///
    /// @param fees - Optional fee schedule override
    /// @param revoke - Revoke flags
    /// @returns Total price in SOL
    #[wasm_bindgen]
    pub fn total_creation_fee(fees: JsValue, revoke: JsValue) -> Result<f64, JsValue> {
        let schedule = parse_schedule(fees)?;
        let revoke: RevokeOptions = serde_wasm_bindgen::from_value(revoke)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse revoke flags: {}", e)))?;
        Ok(schedule.total_creation_fee(&revoke))
    }

    /// Marketing placement price in SOL for a platform name.
    ///
    /// @param fees - Optional fee schedule override
    /// @param platform - Platform name (twitter, instagram, tiktok, chinese)
    /// @returns Price in SOL
    #[wasm_bindgen]
    pub fn marketing_fee(fees: JsValue, platform: String) -> Result<f64, JsValue> {
        let schedule = parse_schedule(fees)?;
        Ok(schedule.marketing_fee_by_name(&platform)?)
    }
}

fn parse_schedule(fees: JsValue) -> Result<FeeSchedule, JsValue> {
    if fees.is_undefined() || fees.is_null() {
        return Ok(FeeSchedule::default());
    }
    serde_wasm_bindgen::from_value(fees)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fee schedule: {}", e)))
}
