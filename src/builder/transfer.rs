//! Native-currency payment transfers.
//!
//! The one place SOL-denominated amounts become lamports.

use crate::error::LaunchpadError;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_system_interface::instruction as system_ix;

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a SOL amount to lamports, rounding to the nearest lamport
/// (ties away from zero). Rejects negative and non-finite inputs, and
/// amounts whose lamport value exceeds the u64 range.
pub fn sol_to_lamports(amount_sol: f64) -> Result<u64, LaunchpadError> {
    if !amount_sol.is_finite() || amount_sol < 0.0 {
        return Err(LaunchpadError::NegativeAmount(amount_sol));
    }
    let lamports = (amount_sol * LAMPORTS_PER_SOL as f64).round();
    // A float-to-int cast saturates instead of failing; reject out-of-range
    // values before casting.
    if lamports >= u64::MAX as f64 {
        return Err(LaunchpadError::AmountTooLarge(amount_sol));
    }
    Ok(lamports as u64)
}

/// Build a payment transfer from `payer` to `receiver` for a SOL amount.
///
/// Payer solvency is not checked here; an underfunded payer surfaces at
/// submission time as an expected, non-fatal failure.
pub fn build_transfer(
    payer: &Pubkey,
    receiver: &Pubkey,
    amount_sol: f64,
) -> Result<Instruction, LaunchpadError> {
    let lamports = sol_to_lamports(amount_sol)?;
    Ok(system_ix::transfer(payer, receiver, lamports))
}
