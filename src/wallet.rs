//! Wallet boundary.

use crate::error::LaunchpadError;
use solana_sdk::transaction::Transaction;

/// An external signer holding the payer's key.
///
/// The crate never sees that key; the wallet receives the transaction with
/// its block reference and any co-signatures already in place, adds the
/// payer's signature, and returns it.
#[allow(async_fn_in_trait)]
pub trait WalletSigner {
    /// Ask the wallet to sign. Fails with
    /// [`LaunchpadError::UserRejected`] when the user declines and
    /// [`LaunchpadError::UnsupportedOperation`] when the wallet cannot sign
    /// transactions of this shape. Both are terminal for the attempt.
    async fn sign_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Transaction, LaunchpadError>;
}
