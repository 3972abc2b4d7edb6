use solana_sdk::pubkey::Pubkey;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Crate error type.
///
/// Variants fall into four groups: validation errors caught before anything
/// touches the network, network-query failures, wallet outcomes, and
/// submission outcomes reported by the remote validator.
#[derive(Debug, Clone, Error)]
pub enum LaunchpadError {
    /// A payment amount was negative (or not a finite number).
    #[error("invalid payment amount: {0}")]
    NegativeAmount(f64),

    /// A payment amount exceeds the representable lamport range.
    #[error("payment amount too large: {0} SOL")]
    AmountTooLarge(f64),

    /// A marketing platform name did not match any supported platform.
    #[error("unknown marketing platform: {0}")]
    UnknownPlatform(String),

    /// The initial-supply string was not a non-negative decimal number.
    #[error("invalid token supply: {0:?}")]
    InvalidSupply(String),

    /// `supply * 10^decimals` does not fit the on-chain u64 amount range.
    #[error("token supply {supply:?} overflows at {decimals} decimals")]
    SupplyOverflow { supply: String, decimals: u8 },

    /// Bad startup configuration (missing fee receiver, bad address, ...).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Metadata account address derivation found no valid program address.
    #[error("metadata address derivation failed for mint {0}")]
    MetadataDerivation(Pubkey),

    /// An RPC query failed. Propagated to the caller unmodified; the caller
    /// may retry the whole build.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The wallet declined to sign. Terminal for this attempt.
    #[error("wallet rejected the signing request")]
    UserRejected,

    /// The wallet cannot perform the requested signing operation.
    #[error("wallet does not support the requested operation")]
    UnsupportedOperation,

    /// A co-signing keypair is not among the transaction's required signers.
    #[error("{0} is not a required signer of this transaction")]
    UnknownSigner(Pubkey),

    /// The remote validator rejected the transaction (insufficient funds,
    /// stale block reference, ...). Carries the remote-provided reason.
    #[error("transaction rejected: {0}")]
    SubmissionFailed(String),

    /// Submission succeeded but confirmation was not observed within the
    /// caller's patience. Non-fatal: the transaction may still finalize.
    #[error("transaction confirmation timed out; it may still finalize")]
    ConfirmationTimeout,

    /// The off-chain metadata store could not be reached or errored.
    #[error("metadata service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The off-chain metadata store rejected our credentials.
    #[error("metadata service authentication failed")]
    AuthenticationFailed,
}

// Required for wasm_bindgen to convert errors to JavaScript exceptions
// Uses js_sys::Error to create a proper JavaScript Error with stack trace
impl From<LaunchpadError> for JsValue {
    fn from(err: LaunchpadError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
