//! Signing and submission flow.
//!
//! Takes an assembled, unsigned transaction through blockhash attachment,
//! co-signing, wallet signing, submission, and confirmation polling.

use crate::error::LaunchpadError;
use crate::rpc::{ChainRpc, TxStatus};
use crate::transaction::TransactionExt;
use crate::wallet::WalletSigner;
use solana_keypair::Keypair;
use solana_sdk::transaction::Transaction;

/// Default confirmation patience for [`confirm`] and [`sign_and_submit`].
///
/// Each poll costs one status round-trip, so 30 polls span well past the
/// typical confirmation latency on devnet and mainnet; smaller values make
/// the optimistic [`Confirmation::ProbablyLanded`] outcome common.
pub const DEFAULT_CONFIRMATION_PATIENCE: u32 = 30;

/// How confident we are that a submitted transaction landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Confirmed execution was observed.
    Confirmed,
    /// Confirmation polling ran out of patience and a final status check
    /// found no failure record. Submitted transactions overwhelmingly
    /// finalize in this situation, so it is reported as a success with a
    /// warning rather than an error.
    ProbablyLanded,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Base58 transaction signature, usable in explorers.
    pub signature: String,
    pub confirmation: Confirmation,
}

/// Poll for confirmation of `signature`, at most `patience` times.
///
/// There is no local sleep between polls; the RPC round-trip itself paces
/// the loop. A `Failed` status is terminal; exhausting patience yields
/// [`LaunchpadError::ConfirmationTimeout`].
///
/// Use [`DEFAULT_CONFIRMATION_PATIENCE`] absent a better bound. A caller
/// holding the transaction's [`crate::rpc::BlockRef`] can stop earlier on
/// its own: once the chain passes `last_valid_block_height` without a
/// confirmation, the transaction's block reference has expired and it will
/// never land.
pub async fn confirm<R: ChainRpc>(
    rpc: &R,
    signature: &str,
    patience: u32,
) -> Result<(), LaunchpadError> {
    for _ in 0..patience {
        match rpc.transaction_status(signature).await? {
            TxStatus::Confirmed => return Ok(()),
            TxStatus::Failed(reason) => return Err(LaunchpadError::SubmissionFailed(reason)),
            TxStatus::Unknown => continue,
        }
    }
    Err(LaunchpadError::ConfirmationTimeout)
}

/// Sign and submit a transaction.
///
/// Steps, in order: fetch and attach a recent blockhash, place each
/// co-signer's signature, hand the transaction to the wallet for the
/// payer's signature, submit, then poll for confirmation. When polling
/// times out, one final status check decides between success, optimistic
/// success ([`Confirmation::ProbablyLanded`]) and failure.
pub async fn sign_and_submit<R: ChainRpc, W: WalletSigner>(
    rpc: &R,
    wallet: &W,
    mut transaction: Transaction,
    co_signers: &[&Keypair],
    patience: u32,
) -> Result<Submission, LaunchpadError> {
    let block_ref = rpc.latest_block_ref().await?;
    transaction.attach_block_ref(&block_ref);
    for keypair in co_signers {
        transaction.co_sign(keypair)?;
    }

    let signed = wallet.sign_transaction(transaction).await?;
    let wire = signed.to_wire_bytes()?;
    let signature = rpc.send_transaction(&wire).await?;
    log::info!("submitted transaction {}", signature);

    let confirmation = match confirm(rpc, &signature, patience).await {
        Ok(()) => Confirmation::Confirmed,
        Err(LaunchpadError::ConfirmationTimeout) => {
            match rpc.transaction_status(&signature).await? {
                TxStatus::Confirmed => Confirmation::Confirmed,
                TxStatus::Failed(reason) => {
                    return Err(LaunchpadError::SubmissionFailed(reason))
                }
                TxStatus::Unknown => {
                    log::warn!(
                        "no confirmation for {} within patience; reporting optimistic success",
                        signature
                    );
                    Confirmation::ProbablyLanded
                }
            }
        }
        Err(other) => return Err(other),
    };

    Ok(Submission {
        signature,
        confirmation,
    })
}
