//! Metaplex Token Metadata instructions.
//!
//! # Wire Format
//!
//! Token Metadata instruction data is a 1-byte discriminator followed by
//! borsh-serialized args. This module only needs `CreateMetadataAccountV3`
//! (discriminator 33):
//!
//! ```text
//! [33] CreateMetadataAccountArgsV3 {
//!     data: DataV2 { name, symbol, uri, seller_fee_basis_points,
//!                    creators: Option<Vec<Creator>>,
//!                    collection: Option<Collection>, uses: Option<Uses> },
//!     is_mutable: bool,
//!     collection_details: Option<CollectionDetails>,
//! }
//! ```
//!
//! The metadata account address is a program-derived address with seeds
//! `["metadata", metadata_program, mint]`.

use super::program_ids;
use crate::error::LaunchpadError;
use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

const CREATE_METADATA_ACCOUNT_V3: u8 = 33;

const METADATA_SEED: &[u8] = b"metadata";

#[derive(BorshSerialize)]
struct Creator {
    address: [u8; 32],
    verified: bool,
    share: u8,
}

#[derive(BorshSerialize)]
#[allow(dead_code)]
struct Collection {
    verified: bool,
    key: [u8; 32],
}

#[derive(BorshSerialize)]
#[allow(dead_code)]
struct Uses {
    use_method: u8,
    remaining: u64,
    total: u64,
}

#[derive(BorshSerialize)]
enum CollectionDetails {
    #[allow(dead_code)]
    V1 { size: u64 },
}

#[derive(BorshSerialize)]
struct DataV2 {
    name: String,
    symbol: String,
    uri: String,
    seller_fee_basis_points: u16,
    creators: Option<Vec<Creator>>,
    collection: Option<Collection>,
    uses: Option<Uses>,
}

#[derive(BorshSerialize)]
struct CreateMetadataAccountArgsV3 {
    data: DataV2,
    is_mutable: bool,
    collection_details: Option<CollectionDetails>,
}

/// Derive the metadata account address for a mint.
///
/// Pure and deterministic: the same mint always yields the same address.
pub fn derive_metadata_account(mint: &Pubkey) -> Result<Pubkey, LaunchpadError> {
    let program = program_ids::metadata_program();
    Pubkey::try_find_program_address(
        &[METADATA_SEED, program.as_ref(), mint.as_ref()],
        &program,
    )
    .map(|(address, _bump)| address)
    .ok_or(LaunchpadError::MetadataDerivation(*mint))
}

/// CreateMetadataAccountV3: attach an on-chain metadata record to a mint.
///
/// The payer is recorded as mint authority, update authority, and sole
/// verified creator with a 100% share. `is_mutable = false` permanently
/// freezes the record (the update-authority revocation path).
///
/// Accounts: [metadata (writable), mint, mint authority (signer),
/// payer (signer, writable), update authority, system program]
pub fn create_metadata_account(
    metadata: &Pubkey,
    mint: &Pubkey,
    payer: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
    is_mutable: bool,
) -> Instruction {
    let args = CreateMetadataAccountArgsV3 {
        data: DataV2 {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
            seller_fee_basis_points: 0,
            creators: Some(vec![Creator {
                address: payer.to_bytes(),
                verified: true,
                share: 100,
            }]),
            collection: None,
            uses: None,
        },
        is_mutable,
        collection_details: None,
    };

    let mut data = vec![CREATE_METADATA_ACCOUNT_V3];
    args.serialize(&mut data).unwrap();

    Instruction::new_with_bytes(
        program_ids::metadata_program(),
        &data,
        vec![
            AccountMeta::new(*metadata, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*payer, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*payer, false),
            AccountMeta::new_readonly(program_ids::system_program(), false),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_derivation_is_deterministic() {
        let mint = Pubkey::new_unique();
        let first = derive_metadata_account(&mint).unwrap();
        let second = derive_metadata_account(&mint).unwrap();
        assert_eq!(first, second);
        assert_ne!(
            first,
            derive_metadata_account(&Pubkey::new_unique()).unwrap()
        );
    }

    #[test]
    fn create_metadata_data_layout() {
        let mint = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let metadata = derive_metadata_account(&mint).unwrap();
        let ix = create_metadata_account(&metadata, &mint, &payer, "Doge2", "DG2", "ipfs://x", true);

        assert_eq!(ix.program_id, program_ids::metadata_program());
        assert_eq!(ix.data[0], CREATE_METADATA_ACCOUNT_V3);
        // borsh string: u32 LE length, then bytes.
        assert_eq!(u32::from_le_bytes(ix.data[1..5].try_into().unwrap()), 5);
        assert_eq!(&ix.data[5..10], b"Doge2");
        // Trailing bytes: is_mutable, then None collection_details.
        assert_eq!(&ix.data[ix.data.len() - 2..], &[1, 0]);
    }

    #[test]
    fn immutable_metadata_when_update_revoked() {
        let mint = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let metadata = derive_metadata_account(&mint).unwrap();
        let ix =
            create_metadata_account(&metadata, &mint, &payer, "Doge2", "DG2", "ipfs://x", false);
        assert_eq!(&ix.data[ix.data.len() - 2..], &[0, 0]);
    }
}
