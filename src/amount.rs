//! Token amounts and fixed-point scaling

use crate::error::{LedgerError, Result};

/// A token amount in base units (the smallest indivisible unit).
///
/// u128 comfortably holds any supply this ledger can reach: the default
/// initial supply is 10^22 base units and every mint is overflow-checked.
pub type Amount = u128;

/// Number of decimal places in the fixed-point representation.
pub const DECIMALS: u8 = 18;

/// Base units per whole token (10^18).
pub const UNITS_PER_TOKEN: Amount = 1_000_000_000_000_000_000;

/// Convert a whole-token count into base units, rejecting values that do not
/// fit in an `Amount`.
pub fn whole_tokens(count: Amount) -> Result<Amount> {
    count
        .checked_mul(UNITS_PER_TOKEN)
        .ok_or(LedgerError::Overflow)
}
