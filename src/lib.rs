//! launchpad-tx: transaction assembly for a Solana token launchpad.
//!
//! Builds the transactions a token launch needs (service fee payments,
//! token creation with optional metadata and authority revocation,
//! marketing placements) and drives them through signing and submission.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//!
//! 1. **Core** (`config`, `builder`, `instructions`, `rpc`, `wallet`,
//!    `submit`, `uploader`) - typed intents in, transactions out, with
//!    narrow traits at the network and wallet boundaries
//! 2. **WASM bindings** (`wasm/`) - thin wrappers that expose the builders
//!    to JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use launchpad_tx::{FeeSchedule, RevokeOptions};
//!
//! let fees = FeeSchedule::default();
//! let revoke = RevokeOptions {
//!     mint_authority: true,
//!     freeze_authority: true,
//!     update_authority: false,
//! };
//!
//! // 0.1 base + 0.05 per revoked mint/freeze authority.
//! assert_eq!(fees.total_creation_fee(&revoke), 0.1 + 0.05 + 0.05);
//! ```

pub mod builder;
pub mod config;
mod error;
mod instructions;
pub mod rpc;
pub mod submit;
pub mod transaction;
pub mod uploader;
pub mod wallet;
pub mod wasm;

// Re-export core types at crate root
pub use builder::{
    build_creation_transaction, build_marketing_transaction,
    build_marketing_transaction_by_name, build_transfer, creation_instructions, sol_to_lamports,
    supply_to_raw, CreationBuild, RevokeOptions, TokenIntent, LAMPORTS_PER_SOL,
};
pub use config::{Config, FeeSchedule, MarketingFees, Network, Platform, DEVNET_RPC_URL};
pub use error::LaunchpadError;
pub use rpc::{BlockRef, ChainRpc, HttpRpc, TxStatus};
pub use submit::{
    confirm, sign_and_submit, Confirmation, Submission, DEFAULT_CONFIRMATION_PATIENCE,
};
pub use transaction::TransactionExt;
pub use uploader::{
    upload_or_skip, upload_token_metadata, MetadataStore, PinataClient, TokenMetadataDocument,
    TokenProfile,
};
pub use wallet::WalletSigner;

// Re-export WASM types
pub use wasm::{BuilderNamespace, FeesNamespace};
