//! Signing and wire-encoding helpers for assembled transactions.

use crate::error::LaunchpadError;
use crate::rpc::BlockRef;
use solana_keypair::Keypair;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use solana_signer::Signer;

/// Operations the submission flow needs on an unsigned [`Transaction`].
///
/// Signatures are placed by index into the signature array rather than via
/// the SDK's partial-sign helpers, because co-signing keypairs come from a
/// different SDK generation than the transaction type.
pub trait TransactionExt {
    /// Embed a recent blockhash. Must happen before any signing; changing
    /// the message afterwards invalidates every signature.
    fn attach_block_ref(&mut self, block_ref: &BlockRef);

    /// Position of `signer` among the required signers, if present.
    fn signer_index(&self, signer: &Pubkey) -> Option<usize>;

    /// Sign with a locally held keypair and place the signature at the
    /// keypair's signer position. Fails with
    /// [`LaunchpadError::UnknownSigner`] if the keypair is not a required
    /// signer.
    fn co_sign(&mut self, keypair: &Keypair) -> Result<(), LaunchpadError>;

    /// Serialize to the wire encoding the node accepts.
    fn to_wire_bytes(&self) -> Result<Vec<u8>, LaunchpadError>;
}

impl TransactionExt for Transaction {
    fn attach_block_ref(&mut self, block_ref: &BlockRef) {
        self.message.recent_blockhash = block_ref.blockhash;
    }

    fn signer_index(&self, signer: &Pubkey) -> Option<usize> {
        let required = self.message.header.num_required_signatures as usize;
        self.message.account_keys[..required]
            .iter()
            .position(|key| key == signer)
    }

    fn co_sign(&mut self, keypair: &Keypair) -> Result<(), LaunchpadError> {
        let signer = Pubkey::from(keypair.pubkey().to_bytes());
        let index = self
            .signer_index(&signer)
            .ok_or(LaunchpadError::UnknownSigner(signer))?;

        let message_bytes = self.message.serialize();
        let signature: [u8; 64] = keypair
            .sign_message(&message_bytes)
            .as_ref()
            .try_into()
            .map_err(|_| LaunchpadError::UnknownSigner(signer))?;

        let required = self.message.header.num_required_signatures as usize;
        if self.signatures.len() < required {
            self.signatures.resize(required, Signature::default());
        }
        self.signatures[index] = Signature::from(signature);
        Ok(())
    }

    fn to_wire_bytes(&self) -> Result<Vec<u8>, LaunchpadError> {
        bincode::serialize(self)
            .map_err(|e| LaunchpadError::SubmissionFailed(format!("transaction encoding: {}", e)))
    }
}
