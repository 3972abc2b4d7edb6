//! Marketing payment transactions.

use crate::builder::transfer;
use crate::config::{Config, Platform};
use crate::error::LaunchpadError;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

/// Build a marketing payment: a single transfer of the platform's price
/// from the payer to the configured fee receiver.
///
/// Purely local; the price is read from the [`Config`] fee schedule and no
/// network query is made. The returned transaction is unsigned and has no
/// block reference attached.
pub fn build_marketing_transaction(
    config: &Config,
    payer: &Pubkey,
    platform: Platform,
) -> Result<Transaction, LaunchpadError> {
    let amount_sol = config.fees.marketing_fee(platform);
    let instruction = transfer::build_transfer(payer, &config.fee_receiver, amount_sol)?;
    let message = Message::new(&[instruction], Some(payer));
    Ok(Transaction::new_unsigned(message))
}

/// String-keyed variant for callers holding a platform name. An unknown
/// name fails with [`LaunchpadError::UnknownPlatform`] before any
/// transaction is assembled.
pub fn build_marketing_transaction_by_name(
    config: &Config,
    payer: &Pubkey,
    platform: &str,
) -> Result<Transaction, LaunchpadError> {
    build_marketing_transaction(config, payer, platform.parse()?)
}
