//! WASM binding for transaction building.
//!
//! Exposes the launch transaction builders:
//! - `buildTokenCreation` - Creates a token creation transaction from an intent
//! - `buildMarketingPayment` - Creates a marketing payment transaction

use super::LaunchParams;
use crate::builder;
use crate::error::LaunchpadError;
use crate::transaction::TransactionExt;
use solana_sdk::message::Message;
use solana_sdk::transaction::Transaction;
use solana_signer::Signer;
use wasm_bindgen::prelude::*;

/// Namespace for transaction building operations.
#[wasm_bindgen]
pub struct BuilderNamespace;

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build a token creation transaction from an intent structure.
    ///
    /// # Params Structure
    ///
    /// ```json
    /// {
    ///   "feePayer": "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB",
    ///   "feeReceiver": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
    ///   "mintRentLamports": 1461600,
    ///   "network": "devnet",
    ///   "fees": { "creationBase": 0.1 }
    /// }
    /// ```
    ///
    /// `mintRentLamports` is the live rent-exemption minimum for a mint
    /// account; the JavaScript caller owns the RPC connection and queries
    /// it before calling in.
    ///
    /// # Intent Structure
    ///
    /// ```json
    /// {
    ///   "name": "Doge2",
    ///   "symbol": "DG2",
    ///   "decimals": 9,
    ///   "supply": "1000000000",
    ///   "revoke": { "mintAuthority": true },
    ///   "metadataUri": "ipfs://Qm..."
    /// }
    /// ```
    ///
    /// # Returns
    ///
    /// An object with:
    /// - `transactionBytes` - serialized unsigned transaction (Uint8Array)
    /// - `mintAddress` - the new token's address (base58 string)
    /// - `mintSecretKey` - the mint keypair's 64-byte secret (Uint8Array),
    ///   needed for the mint's co-signature and then discarded
    ///
    /// @param params - Launch parameters as a JSON object
    /// @param intent - The token creation intent as a JSON object
    /// @returns Build result object
    #[wasm_bindgen]
    pub fn build_token_creation(params: JsValue, intent: JsValue) -> Result<JsValue, JsValue> {
        let params = LaunchParams::parse(params)?;
        let intent: builder::TokenIntent = serde_wasm_bindgen::from_value(intent)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse token intent: {}", e)))?;

        let config = params.config()?;
        let payer = params.payer()?;
        let mint_rent = params.mint_rent_lamports.ok_or_else(|| {
            JsValue::from(LaunchpadError::Config(
                "mintRentLamports is required".to_string(),
            ))
        })?;

        let mint = solana_keypair::Keypair::new();
        let mint_address =
            solana_sdk::pubkey::Pubkey::from(mint.pubkey().to_bytes());
        let total_fee = config.fees.total_creation_fee(&intent.revoke);

        let instructions = builder::creation_instructions(
            &config,
            &payer,
            &mint_address,
            &intent,
            total_fee,
            mint_rent,
        )?;
        let transaction =
            Transaction::new_unsigned(Message::new(&instructions, Some(&payer)));
        let wire = transaction.to_wire_bytes()?;

        let result = js_sys::Object::new();
        js_sys::Reflect::set(
            &result,
            &JsValue::from_str("transactionBytes"),
            &js_sys::Uint8Array::from(wire.as_slice()),
        )?;
        js_sys::Reflect::set(
            &result,
            &JsValue::from_str("mintAddress"),
            &JsValue::from_str(&mint_address.to_string()),
        )?;
        js_sys::Reflect::set(
            &result,
            &JsValue::from_str("mintSecretKey"),
            &js_sys::Uint8Array::from(mint.to_bytes().as_slice()),
        )?;
        Ok(result.into())
    }

    /// Build a marketing payment transaction.
    ///
    /// The price is looked up from the fee schedule by platform name; an
    /// unknown platform name is rejected before anything is built.
    ///
    /// @param params - Launch parameters as a JSON object
    /// @param platform - Platform name (twitter, instagram, tiktok, chinese)
    /// @returns Serialized unsigned transaction bytes
    #[wasm_bindgen]
    pub fn build_marketing_payment(params: JsValue, platform: String) -> Result<Vec<u8>, JsValue> {
        let params = LaunchParams::parse(params)?;
        let config = params.config()?;
        let payer = params.payer()?;

        let transaction =
            builder::build_marketing_transaction_by_name(&config, &payer, &platform)?;
        Ok(transaction.to_wire_bytes()?)
    }
}
