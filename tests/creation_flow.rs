//! End-to-end creation flow against in-memory network and wallet fakes.

use launchpad_tx::{
    build_creation_transaction, sign_and_submit, BlockRef, ChainRpc, Config, Confirmation,
    FeeSchedule, LaunchpadError, Network, RevokeOptions, TokenIntent, TxStatus, WalletSigner,
};
use solana_keypair::Keypair;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use solana_signer::Signer;

struct FakeChain;

impl ChainRpc for FakeChain {
    async fn latest_block_ref(&self) -> Result<BlockRef, LaunchpadError> {
        Ok(BlockRef {
            blockhash: Hash::new_unique(),
            last_valid_block_height: 3090,
        })
    }
    async fn minimum_balance_for_rent_exemption(
        &self,
        _space: usize,
    ) -> Result<u64, LaunchpadError> {
        Ok(1_461_600)
    }
    async fn send_transaction(&self, wire: &[u8]) -> Result<String, LaunchpadError> {
        // The node only accepts fully signed transactions.
        let tx: Transaction = bincode::deserialize(wire)
            .map_err(|e| LaunchpadError::SubmissionFailed(e.to_string()))?;
        if tx.signatures.iter().any(|sig| *sig == Signature::default()) {
            return Err(LaunchpadError::SubmissionFailed(
                "missing signature".to_string(),
            ));
        }
        Ok(tx.signatures[0].to_string())
    }
    async fn transaction_status(&self, _sig: &str) -> Result<TxStatus, LaunchpadError> {
        Ok(TxStatus::Confirmed)
    }
}

struct FakeWallet {
    payer: Keypair,
}

impl WalletSigner for FakeWallet {
    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, LaunchpadError> {
        use launchpad_tx::TransactionExt;
        transaction.co_sign(&self.payer)?;
        Ok(transaction)
    }
}

fn doge2() -> TokenIntent {
    TokenIntent {
        name: "Doge2".to_string(),
        symbol: "DG2".to_string(),
        decimals: 9,
        supply: "1000000000".to_string(),
        revoke: RevokeOptions {
            mint_authority: true,
            freeze_authority: false,
            update_authority: false,
        },
        metadata_uri: None,
    }
}

#[tokio::test]
async fn doge2_launch_end_to_end() {
    let config = Config::new(
        Network::Devnet,
        None,
        Pubkey::new_unique(),
        FeeSchedule::default(),
    )
    .unwrap();
    let payer = Keypair::new();
    let payer_key = Pubkey::from(payer.pubkey().to_bytes());
    let intent = doge2();
    let total_fee = config.fees.total_creation_fee(&intent.revoke);
    assert_eq!(total_fee, 0.1 + 0.05);

    let chain = FakeChain;
    let build = build_creation_transaction(&chain, &config, &payer_key, &intent, total_fee)
        .await
        .unwrap();

    assert_eq!(build.transaction.message.instructions.len(), 6);
    assert_eq!(build.transaction.message.header.num_required_signatures, 2);

    let wallet = FakeWallet { payer };
    let submission = sign_and_submit(
        &chain,
        &wallet,
        build.transaction.clone(),
        &[&build.mint],
        5,
    )
    .await
    .unwrap();

    assert_eq!(submission.confirmation, Confirmation::Confirmed);
    assert!(!submission.signature.is_empty());
}

#[tokio::test]
async fn missing_mint_co_signature_is_rejected_by_the_node() {
    let config = Config::new(
        Network::Devnet,
        None,
        Pubkey::new_unique(),
        FeeSchedule::default(),
    )
    .unwrap();
    let payer = Keypair::new();
    let payer_key = Pubkey::from(payer.pubkey().to_bytes());
    let intent = doge2();

    let chain = FakeChain;
    let build = build_creation_transaction(&chain, &config, &payer_key, &intent, 0.15)
        .await
        .unwrap();

    let wallet = FakeWallet { payer };
    // No co-signers passed: the mint's signature slot stays empty.
    let err = sign_and_submit(&chain, &wallet, build.transaction, &[], 5)
        .await
        .unwrap_err();
    assert!(matches!(err, LaunchpadError::SubmissionFailed(_)));
}
