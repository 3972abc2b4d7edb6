//! Token creation transaction builder.
//!
//! Assembles the ordered instruction sequence for one token launch: service
//! fee transfer, mint account creation, mint initialization, optional
//! metadata record, optional initial supply, optional authority revocations.
//!
//! Instruction order is load-bearing: the validator deterministically
//! rejects a transaction that initializes before creating, mints before
//! initializing, or revokes before minting.

use crate::builder::transfer;
use crate::builder::types::TokenIntent;
use crate::config::Config;
use crate::error::LaunchpadError;
use crate::instructions::{metadata as metadata_ix, program_ids, token as token_ix};
use crate::rpc::ChainRpc;

use solana_keypair::Keypair;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use solana_signer::Signer;
use solana_system_interface::instruction as system_ix;
use spl_token::instruction::AuthorityType;

/// Result of building a creation transaction.
#[derive(Debug)]
pub struct CreationBuild {
    /// Unsigned transaction, without a recent block reference. The caller
    /// attaches a fresh blockhash and signatures just before submission.
    pub transaction: Transaction,
    /// The new token's keypair. Its public half is the token address; its
    /// private half co-signs the creation transaction exactly once (the
    /// network requires the new account to prove ownership of its own
    /// address) and is then discarded.
    pub mint: Keypair,
}

impl CreationBuild {
    /// The new token's address.
    pub fn mint_address(&self) -> Pubkey {
        Pubkey::from(self.mint.pubkey().to_bytes())
    }
}

/// Build the token creation transaction for an intent.
///
/// Performs exactly one network query: the rent-exemption minimum for a
/// mint-sized account, which changes with network parameters and must not be
/// hard-coded. A failed query surfaces as
/// [`LaunchpadError::NetworkUnavailable`] with no local retry; the caller
/// may re-invoke the whole builder.
pub async fn build_creation_transaction<R: ChainRpc>(
    rpc: &R,
    config: &Config,
    payer: &Pubkey,
    intent: &TokenIntent,
    total_fee_sol: f64,
) -> Result<CreationBuild, LaunchpadError> {
    let mint = Keypair::new();
    let mint_address = Pubkey::from(mint.pubkey().to_bytes());

    let mint_rent = rpc
        .minimum_balance_for_rent_exemption(token_ix::mint_account_len())
        .await?;

    let instructions =
        creation_instructions(config, payer, &mint_address, intent, total_fee_sol, mint_rent)?;
    let message = Message::new(&instructions, Some(payer));

    Ok(CreationBuild {
        transaction: Transaction::new_unsigned(message),
        mint,
    })
}

/// Assemble the creation instruction sequence. Pure: all network-derived
/// inputs (`mint_rent`) are parameters.
pub fn creation_instructions(
    config: &Config,
    payer: &Pubkey,
    mint: &Pubkey,
    intent: &TokenIntent,
    total_fee_sol: f64,
    mint_rent: u64,
) -> Result<Vec<Instruction>, LaunchpadError> {
    let raw_supply = supply_to_raw(&intent.supply, intent.decimals)?;

    let mut instructions = vec![
        // Service fee first, then the mint account funded with the live
        // rent-exemption minimum, then initialization naming the payer as
        // both mint and freeze authority.
        transfer::build_transfer(payer, &config.fee_receiver, total_fee_sol)?,
        system_ix::create_account(
            payer,
            mint,
            mint_rent,
            token_ix::mint_account_len() as u64,
            &program_ids::token_program(),
        ),
        token_ix::initialize_mint(mint, payer, intent.decimals),
    ];

    let metadata_step = match &intent.metadata_uri {
        Some(uri) => {
            let metadata = metadata_ix::derive_metadata_account(mint)?;
            Some(metadata_ix::create_metadata_account(
                &metadata,
                mint,
                payer,
                &intent.name,
                &intent.symbol,
                uri,
                !intent.revoke.update_authority,
            ))
        }
        None => None,
    };
    let ata = token_ix::derive_associated_token_account(payer, mint);

    // Optional steps in their fixed, declared order. Each entry is guarded
    // by a predicate over the intent; flattening preserves the order.
    let optional: [Option<Instruction>; 5] = [
        metadata_step,
        (raw_supply > 0)
            .then(|| token_ix::create_associated_token_account(payer, &ata, payer, mint)),
        (raw_supply > 0)
            .then(|| token_ix::mint_to_checked(mint, &ata, payer, raw_supply, intent.decimals)),
        intent
            .revoke
            .mint_authority
            .then(|| token_ix::revoke_authority(mint, payer, AuthorityType::MintTokens)),
        intent
            .revoke
            .freeze_authority
            .then(|| token_ix::revoke_authority(mint, payer, AuthorityType::FreezeAccount)),
    ];
    instructions.extend(optional.into_iter().flatten());

    Ok(instructions)
}

/// Compute `floor(supply * 10^decimals)` exactly from a decimal string.
///
/// Exact decimal arithmetic over a u128 intermediate; floating point would
/// lose precision above 2^53. Fractional digits beyond the mint's precision
/// are floored away, never an error; an amount exceeding u64 is.
pub fn supply_to_raw(supply: &str, decimals: u8) -> Result<u64, LaunchpadError> {
    let trimmed = supply.trim();
    let (int_digits, frac_digits) = match trimmed.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_digits.is_empty() && frac_digits.is_empty())
        || !all_digits(int_digits)
        || !all_digits(frac_digits)
    {
        return Err(LaunchpadError::InvalidSupply(supply.to_string()));
    }

    let overflow = || LaunchpadError::SupplyOverflow {
        supply: supply.to_string(),
        decimals,
    };

    // Digits that survive scaling: the integer part plus the first
    // `decimals` fractional digits.
    let kept_frac = &frac_digits[..frac_digits.len().min(decimals as usize)];
    let mut value: u128 = 0;
    for digit in int_digits.bytes().chain(kept_frac.bytes()) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(digit - b'0')))
            .ok_or_else(overflow)?;
    }
    if value == 0 {
        return Ok(0);
    }

    let remaining_scale = (decimals as usize - kept_frac.len()) as u32;
    let scale = 10u128.checked_pow(remaining_scale).ok_or_else(overflow)?;
    let raw = value.checked_mul(scale).ok_or_else(overflow)?;
    u64::try_from(raw).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::types::RevokeOptions;
    use crate::config::{FeeSchedule, Network};
    use crate::rpc::{BlockRef, TxStatus};

    const MINT_RENT: u64 = 1_461_600;

    fn test_config() -> Config {
        Config::new(
            Network::Devnet,
            None,
            Pubkey::new_unique(),
            FeeSchedule::default(),
        )
        .unwrap()
    }

    fn doge2_intent() -> TokenIntent {
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

    // Discriminants for picking instructions apart in assertions.
    const SYSTEM_TRANSFER: &[u8] = &[2, 0, 0, 0];
    const SYSTEM_CREATE_ACCOUNT: u8 = 0;
    const TOKEN_INITIALIZE_MINT: u8 = 0;
    const TOKEN_SET_AUTHORITY: u8 = 6;
    const TOKEN_MINT_TO_CHECKED: u8 = 14;

    #[test]
    fn supply_scales_exactly() {
        assert_eq!(
            supply_to_raw("1000000000", 9).unwrap(),
            1_000_000_000_000_000_000
        );
        assert_eq!(supply_to_raw("1", 0).unwrap(), 1);
        assert_eq!(supply_to_raw("0", 9).unwrap(), 0);
    }

    #[test]
    fn fractional_remainder_is_floored() {
        assert_eq!(supply_to_raw("1.75", 1).unwrap(), 17);
        assert_eq!(supply_to_raw("0.5", 0).unwrap(), 0);
        assert_eq!(supply_to_raw(".5", 1).unwrap(), 5);
        assert_eq!(supply_to_raw("2.5", 9).unwrap(), 2_500_000_000);
    }

    #[test]
    fn supply_overflow_is_an_error() {
        // u64::MAX is 18446744073709551615.
        assert_eq!(supply_to_raw("18446744073709551615", 0).unwrap(), u64::MAX);
        assert!(matches!(
            supply_to_raw("18446744073709551616", 0),
            Err(LaunchpadError::SupplyOverflow { .. })
        ));
        assert!(matches!(
            supply_to_raw("1000000000000", 9),
            Err(LaunchpadError::SupplyOverflow { .. })
        ));
    }

    #[test]
    fn malformed_supply_is_rejected() {
        for bad in ["", ".", "-5", "1e9", "12a", "1,000"] {
            assert!(
                matches!(
                    supply_to_raw(bad, 9),
                    Err(LaunchpadError::InvalidSupply(_))
                ),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn doge2_creation_has_six_instructions_in_order() {
        let config = test_config();
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let intent = doge2_intent();
        let fee = config.fees.total_creation_fee(&intent.revoke);

        let ixs =
            creation_instructions(&config, &payer, &mint, &intent, fee, MINT_RENT).unwrap();
        assert_eq!(ixs.len(), 6);

        // 1. fee transfer
        assert_eq!(&ixs[0].data[0..4], SYSTEM_TRANSFER);
        assert_eq!(ixs[0].accounts[1].pubkey, config.fee_receiver);
        // 2. create mint account, funded with the queried rent minimum
        assert_eq!(ixs[1].data[0], SYSTEM_CREATE_ACCOUNT);
        assert_eq!(
            u64::from_le_bytes(ixs[1].data[4..12].try_into().unwrap()),
            MINT_RENT
        );
        assert_eq!(ixs[1].accounts[1].pubkey, mint);
        // 3. initialize mint
        assert_eq!(ixs[2].program_id, program_ids::token_program());
        assert_eq!(ixs[2].data[0], TOKEN_INITIALIZE_MINT);
        // 4. create associated token account
        assert_eq!(ixs[3].program_id, program_ids::ata_program());
        // 5. mint initial supply
        assert_eq!(ixs[4].data[0], TOKEN_MINT_TO_CHECKED);
        assert_eq!(
            u64::from_le_bytes(ixs[4].data[1..9].try_into().unwrap()),
            1_000_000_000_000_000_000
        );
        // 6. revoke mint authority
        assert_eq!(ixs[5].data[0], TOKEN_SET_AUTHORITY);
    }

    #[test]
    fn no_revocation_flags_means_no_set_authority() {
        let config = test_config();
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let intent = TokenIntent {
            revoke: RevokeOptions::default(),
            ..doge2_intent()
        };

        let ixs = creation_instructions(&config, &payer, &mint, &intent, 0.1, MINT_RENT).unwrap();
        assert_eq!(ixs.len(), 5);
        assert!(ixs
            .iter()
            .filter(|ix| ix.program_id == program_ids::token_program())
            .all(|ix| ix.data[0] != TOKEN_SET_AUTHORITY));
    }

    #[test]
    fn metadata_lands_between_initialize_and_supply() {
        let config = test_config();
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let intent = TokenIntent {
            metadata_uri: Some("ipfs://QmMeta".to_string()),
            ..doge2_intent()
        };

        let ixs = creation_instructions(&config, &payer, &mint, &intent, 0.2, MINT_RENT).unwrap();
        assert_eq!(ixs.len(), 7);
        assert_eq!(ixs[3].program_id, program_ids::metadata_program());
        assert_eq!(ixs[4].program_id, program_ids::ata_program());
    }

    #[test]
    fn zero_supply_skips_ata_and_mint_to() {
        let config = test_config();
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let intent = TokenIntent {
            supply: "0".to_string(),
            ..doge2_intent()
        };

        let ixs = creation_instructions(&config, &payer, &mint, &intent, 0.15, MINT_RENT).unwrap();
        // fee, create, initialize, revoke-mint
        assert_eq!(ixs.len(), 4);
        assert!(ixs.iter().all(|ix| ix.program_id != program_ids::ata_program()));
    }

    struct FixedRent(u64);

    impl ChainRpc for FixedRent {
        async fn latest_block_ref(&self) -> Result<BlockRef, LaunchpadError> {
            unreachable!("not used by the builder")
        }
        async fn minimum_balance_for_rent_exemption(
            &self,
            _space: usize,
        ) -> Result<u64, LaunchpadError> {
            Ok(self.0)
        }
        async fn send_transaction(&self, _wire: &[u8]) -> Result<String, LaunchpadError> {
            unreachable!("not used by the builder")
        }
        async fn transaction_status(&self, _sig: &str) -> Result<TxStatus, LaunchpadError> {
            unreachable!("not used by the builder")
        }
    }

    struct RentUnavailable;

    impl ChainRpc for RentUnavailable {
        async fn latest_block_ref(&self) -> Result<BlockRef, LaunchpadError> {
            Err(LaunchpadError::NetworkUnavailable("down".to_string()))
        }
        async fn minimum_balance_for_rent_exemption(
            &self,
            _space: usize,
        ) -> Result<u64, LaunchpadError> {
            Err(LaunchpadError::NetworkUnavailable("down".to_string()))
        }
        async fn send_transaction(&self, _wire: &[u8]) -> Result<String, LaunchpadError> {
            Err(LaunchpadError::NetworkUnavailable("down".to_string()))
        }
        async fn transaction_status(&self, _sig: &str) -> Result<TxStatus, LaunchpadError> {
            Err(LaunchpadError::NetworkUnavailable("down".to_string()))
        }
    }

    #[tokio::test]
    async fn build_requires_mint_co_signature() {
        let config = test_config();
        let payer = Pubkey::new_unique();
        let build =
            build_creation_transaction(&FixedRent(MINT_RENT), &config, &payer, &doge2_intent(), 0.15)
                .await
                .unwrap();

        let message = &build.transaction.message;
        // Payer (fee payer) and the mint account must both sign.
        assert_eq!(message.header.num_required_signatures, 2);
        assert_eq!(message.account_keys[0], payer);
        assert!(message.account_keys[..2].contains(&build.mint_address()));
        assert_eq!(message.instructions.len(), 6);
        // No block reference yet; the caller attaches one before signing.
        assert_eq!(message.recent_blockhash, solana_sdk::hash::Hash::default());
    }

    #[tokio::test]
    async fn rent_query_failure_propagates_uncaught() {
        let config = test_config();
        let payer = Pubkey::new_unique();
        let err =
            build_creation_transaction(&RentUnavailable, &config, &payer, &doge2_intent(), 0.15)
                .await
                .unwrap_err();
        assert!(matches!(err, LaunchpadError::NetworkUnavailable(_)));
    }
}
