//! Hand-assembled program instructions.
//!
//! Instruction data is packed through the program interface crates
//! (`spl-token`) or borsh (Metaplex token metadata); account lists are built
//! explicitly with `AccountMeta` so no cross-version pubkey types leak into
//! the SDK 3.x transaction path.

pub mod metadata;
pub mod token;

use solana_sdk::pubkey::Pubkey;

/// Well-known program IDs and sysvars.
pub mod program_ids {
    use super::Pubkey;

    /// SPL Token Program: https://www.solana-program.com/docs/token
    pub fn token_program() -> Pubkey {
        "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
            .parse()
            .unwrap()
    }

    /// Associated Token Account Program:
    /// https://www.solana-program.com/docs/associated-token-account
    pub fn ata_program() -> Pubkey {
        "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
            .parse()
            .unwrap()
    }

    /// Metaplex Token Metadata Program.
    pub fn metadata_program() -> Pubkey {
        "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"
            .parse()
            .unwrap()
    }

    pub fn system_program() -> Pubkey {
        "11111111111111111111111111111111".parse().unwrap()
    }

    pub fn rent_sysvar() -> Pubkey {
        "SysvarRent111111111111111111111111111111111"
            .parse()
            .unwrap()
    }
}
