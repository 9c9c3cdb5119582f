//! Transfer fee computation

use crate::amount::Amount;

/// Fee on a transfer: floor(amount * percentage / 100).
///
/// Computed by splitting `amount` into its quotient and remainder modulo 100
/// so the multiplication can never overflow, while still matching the exact
/// floored product. Callers must have validated `percentage <= 100`.
pub fn transfer_fee(amount: Amount, percentage: u8) -> Amount {
    let pct = percentage as Amount;
    (amount / 100) * pct + (amount % 100) * pct / 100
}
