//! Transaction builders: typed launch intents in, unsigned transactions out.
//!
//! Builders never sign and never talk to a wallet. With the single
//! exception of the creation builder's rent-exemption query, they are pure
//! functions of their inputs and the [`crate::config::Config`].

pub mod marketing;
pub mod token;
pub mod transfer;
pub mod types;

pub use marketing::{build_marketing_transaction, build_marketing_transaction_by_name};
pub use token::{build_creation_transaction, creation_instructions, supply_to_raw, CreationBuild};
pub use transfer::{build_transfer, sol_to_lamports, LAMPORTS_PER_SOL};
pub use types::{RevokeOptions, TokenIntent};
