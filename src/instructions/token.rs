//! SPL Token Program instructions used by the creation builder.
//!
//! Data payloads are packed via `spl_token::instruction::TokenInstruction`;
//! the token program's pubkey types come from an older SDK generation, so
//! authorities embedded in data are rebuilt from raw bytes and account lists
//! use SDK 3.x `AccountMeta` directly.

use super::program_ids;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use spl_token::instruction::{AuthorityType, TokenInstruction};
use spl_token::solana_program::program_option::COption;

/// Size in bytes of a mint account, used for rent-exemption sizing.
pub fn mint_account_len() -> usize {
    use spl_token::solana_program::program_pack::Pack;
    spl_token::state::Mint::LEN
}

fn spl_pubkey(key: &Pubkey) -> spl_token::solana_program::pubkey::Pubkey {
    spl_token::solana_program::pubkey::Pubkey::new_from_array(key.to_bytes())
}

/// InitializeMint: configures a freshly created mint account.
///
/// `authority` becomes both the mint authority and the freeze authority.
/// Accounts: [mint (writable), rent sysvar]
pub fn initialize_mint(mint: &Pubkey, authority: &Pubkey, decimals: u8) -> Instruction {
    let authority = spl_pubkey(authority);
    let data = TokenInstruction::InitializeMint {
        decimals,
        mint_authority: authority,
        freeze_authority: COption::Some(authority),
    }
    .pack();

    Instruction::new_with_bytes(
        program_ids::token_program(),
        &data,
        vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(program_ids::rent_sysvar(), false),
        ],
    )
}

/// Derive the owner's associated token account for a mint.
///
/// Pure derivation (seeds: owner, token program, mint), no network
/// round-trip.
pub fn derive_associated_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let token_program = program_ids::token_program();
    let seeds = &[owner.as_ref(), token_program.as_ref(), mint.as_ref()];
    let (ata, _bump) = Pubkey::find_program_address(seeds, &program_ids::ata_program());
    ata
}

/// Create the owner's associated token account for a mint.
///
/// The ATA program's create instruction takes no data.
/// Accounts: [payer (signer, writable), ata (writable), owner, mint,
/// system program, token program]
pub fn create_associated_token_account(
    payer: &Pubkey,
    ata: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    Instruction::new_with_bytes(
        program_ids::ata_program(),
        &[],
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*ata, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(program_ids::system_program(), false),
            AccountMeta::new_readonly(program_ids::token_program(), false),
        ],
    )
}

/// MintToChecked: mint `amount` raw units into `destination`.
///
/// The decimals argument is validated against the mint's configured decimals
/// by the token program at execution time, not here.
/// Accounts: [mint (writable), destination (writable), authority (signer)]
pub fn mint_to_checked(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Instruction {
    let data = TokenInstruction::MintToChecked { amount, decimals }.pack();

    Instruction::new_with_bytes(
        program_ids::token_program(),
        &data,
        vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*authority, true),
        ],
    )
}

/// SetAuthority with no successor: permanently revokes an authority.
/// Accounts: [mint (writable), current authority (signer)]
pub fn revoke_authority(
    mint: &Pubkey,
    current_authority: &Pubkey,
    authority_type: AuthorityType,
) -> Instruction {
    let data = TokenInstruction::SetAuthority {
        authority_type,
        new_authority: COption::None,
    }
    .pack();

    Instruction::new_with_bytes(
        program_ids::token_program(),
        &data,
        vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*current_authority, true),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ata_derivation_is_deterministic() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(
            derive_associated_token_account(&owner, &mint),
            derive_associated_token_account(&owner, &mint),
        );
        // A different mint gives a different account.
        assert_ne!(
            derive_associated_token_account(&owner, &mint),
            derive_associated_token_account(&owner, &Pubkey::new_unique()),
        );
    }

    #[test]
    fn initialize_mint_sets_both_authorities() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let ix = initialize_mint(&mint, &authority, 9);

        assert_eq!(ix.program_id, program_ids::token_program());
        assert_eq!(ix.accounts.len(), 2);
        assert!(ix.accounts[0].is_writable);
        // InitializeMint discriminant.
        assert_eq!(ix.data[0], 0);
        // decimals immediately follows the tag.
        assert_eq!(ix.data[1], 9);
        // mint authority bytes, then COption tag 1 (Some) and freeze
        // authority bytes.
        assert_eq!(&ix.data[2..34], authority.to_bytes().as_slice());
        assert_eq!(ix.data[34], 1);
        assert_eq!(&ix.data[35..67], authority.to_bytes().as_slice());
    }

    #[test]
    fn mint_to_checked_packs_amount_and_decimals() {
        let ix = mint_to_checked(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            1_000_000_000_000_000_000,
            9,
        );
        // MintToChecked discriminant.
        assert_eq!(ix.data[0], 14);
        assert_eq!(
            u64::from_le_bytes(ix.data[1..9].try_into().unwrap()),
            1_000_000_000_000_000_000
        );
        assert_eq!(ix.data[9], 9);
        assert!(ix.accounts[2].is_signer);
    }

    #[test]
    fn revoke_authority_has_no_successor() {
        let ix = revoke_authority(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            AuthorityType::MintTokens,
        );
        // SetAuthority discriminant, then authority type, then COption::None.
        assert_eq!(ix.data[0], 6);
        assert_eq!(*ix.data.last().unwrap(), 0);
    }
}
