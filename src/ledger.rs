//! The ledger state machine: balances, supply, ownership, blacklist, fees,
//! and the pause switch.
//!
//! Every operation takes the caller's address explicitly; the host
//! environment is responsible for supplying a truthful caller identity and
//! for serializing calls (see [`crate::shared`] for a ready-made wrapper).
//! Each operation checks all of its preconditions before touching any state,
//! so a returned error always means "nothing changed".

use crate::address::{self, Address};
use crate::amount::{self, Amount, DECIMALS};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::fees;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Ledger {
    name: String,
    symbol: String,
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
    owner: Address,
    blacklist: HashSet<Address>,
    /// None until the owner configures one. While unset, transfers carry no
    /// fee regardless of the configured percentage.
    fee_recipient: Option<Address>,
    fee_percentage: u8,
    paused: bool,
}

impl Ledger {
    /// Create a ledger with default configuration, crediting the deployer
    /// with the full initial supply.
    pub fn new(deployer: Address) -> Self {
        // The default 10,000-token supply always fits in an Amount
        Self::with_config(deployer, &LedgerConfig::default())
            .expect("default initial supply fits in an Amount")
    }

    /// Create a ledger from explicit configuration. Fails with `Overflow` if
    /// the configured initial supply does not fit in an `Amount` once scaled
    /// to base units.
    pub fn with_config(deployer: Address, config: &LedgerConfig) -> Result<Self> {
        let initial_supply = amount::whole_tokens(config.token.initial_supply as Amount)?;
        let mut balances = HashMap::new();
        balances.insert(deployer, initial_supply);

        info!(
            owner = %address::address_to_hex(&deployer),
            supply = initial_supply,
            "ledger created"
        );

        Ok(Self {
            name: config.token.name.clone(),
            symbol: config.token.symbol.clone(),
            balances,
            total_supply: initial_supply,
            owner: deployer,
            blacklist: HashSet::new(),
            fee_recipient: None,
            fee_percentage: 0,
            paused: false,
        })
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    // ------------------------------------------------------------------
    // Supply & balances
    // ------------------------------------------------------------------

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of `address`, zero for accounts the ledger has never seen.
    pub fn balance_of(&self, address: &Address) -> Amount {
        *self.balances.get(address).unwrap_or(&0)
    }

    /// Sum of every tracked balance. Always equals `total_supply`; exposed
    /// so hosts and tests can assert the conservation invariant directly.
    pub fn balance_sum(&self) -> Amount {
        self.balances.values().sum()
    }

    /// Mint `amount` new base units into `to`'s balance. Owner only.
    pub fn mint(&mut self, caller: Address, to: Address, amount: Amount) -> Result<()> {
        self.require_owner(&caller)?;

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        // The recipient's balance is bounded by the supply, so this addition
        // cannot overflow once the supply addition has been checked
        self.total_supply = new_supply;
        *self.balances.entry(to).or_insert(0) += amount;

        info!(
            to = %address::address_to_hex(&to),
            amount,
            supply = self.total_supply,
            "minted"
        );
        Ok(())
    }

    /// Burn `amount` base units from the caller's own balance.
    pub fn burn(&mut self, caller: Address, amount: Amount) -> Result<()> {
        let available = self.balance_of(&caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                required: amount,
            });
        }

        self.set_balance(caller, available - amount);
        self.total_supply -= amount;

        info!(
            from = %address::address_to_hex(&caller),
            amount,
            supply = self.total_supply,
            "burned"
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------

    /// Move `amount` base units from the caller to `to`, routing a fee to the
    /// configured fee recipient when one is set.
    ///
    /// Preconditions are checked in a fixed order and the first failure wins:
    /// pause state, sender blacklist, sender balance, zero-address target.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> Result<()> {
        if self.paused {
            return Err(LedgerError::TransfersPaused);
        }
        if self.blacklist.contains(&caller) {
            return Err(LedgerError::SenderBlacklisted);
        }
        let available = self.balance_of(&caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        if address::is_zero(&to) {
            return Err(LedgerError::InvalidAddress(
                "transfer target is the zero address".to_string(),
            ));
        }

        // With no recipient configured the fee is forced to zero at
        // computation time, so value is never burned to an untracked address
        let fee = match self.fee_recipient {
            Some(_) => fees::transfer_fee(amount, self.fee_percentage),
            None => 0,
        };
        let net_amount = amount - fee;

        self.set_balance(caller, available - amount);
        *self.balances.entry(to).or_insert(0) += net_amount;
        if fee > 0 {
            if let Some(recipient) = self.fee_recipient {
                *self.balances.entry(recipient).or_insert(0) += fee;
            }
        }

        debug!(
            from = %address::address_to_hex(&caller),
            to = %address::address_to_hex(&to),
            amount,
            fee,
            "transfer"
        );
        Ok(())
    }

    /// Set the address that collects transfer fees. Owner only. Passing the
    /// zero address clears the recipient, disabling fees until one is set.
    pub fn set_fee_recipient(&mut self, caller: Address, recipient: Address) -> Result<()> {
        self.require_owner(&caller)?;
        self.fee_recipient = if address::is_zero(&recipient) {
            None
        } else {
            Some(recipient)
        };
        info!(recipient = %address::address_to_hex(&recipient), "fee recipient updated");
        Ok(())
    }

    pub fn fee_recipient(&self) -> Option<Address> {
        self.fee_recipient
    }

    /// Set the whole-percent transfer fee. Owner only; values above 100 are
    /// rejected with `InvalidPercentage`.
    pub fn set_fee_percentage(&mut self, caller: Address, percentage: u8) -> Result<()> {
        self.require_owner(&caller)?;
        if percentage > 100 {
            return Err(LedgerError::InvalidPercentage(percentage));
        }
        self.fee_percentage = percentage;
        info!(percentage, "fee percentage updated");
        Ok(())
    }

    pub fn fee_percentage(&self) -> u8 {
        self.fee_percentage
    }

    // ------------------------------------------------------------------
    // Ownership & access control
    // ------------------------------------------------------------------

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Hand ownership to `new_owner`. The old owner loses all privileged
    /// rights the moment this returns.
    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<()> {
        self.require_owner(&caller)?;
        if address::is_zero(&new_owner) {
            return Err(LedgerError::InvalidAddress(
                "new owner is the zero address".to_string(),
            ));
        }
        self.owner = new_owner;
        info!(owner = %address::address_to_hex(&new_owner), "ownership transferred");
        Ok(())
    }

    fn require_owner(&self, caller: &Address) -> Result<()> {
        if *caller != self.owner {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Blacklist
    // ------------------------------------------------------------------

    /// Bar `address` from initiating transfers. Owner only; blacklisting an
    /// already-blacklisted address is a no-op success.
    pub fn blacklist_address(&mut self, caller: Address, address: Address) -> Result<()> {
        self.require_owner(&caller)?;
        if self.blacklist.insert(address) {
            info!(address = %address::address_to_hex(&address), "address blacklisted");
        }
        Ok(())
    }

    /// Remove `address` from the blacklist. Owner only; idempotent.
    pub fn unblacklist_address(&mut self, caller: Address, address: Address) -> Result<()> {
        self.require_owner(&caller)?;
        if self.blacklist.remove(&address) {
            info!(address = %address::address_to_hex(&address), "address unblacklisted");
        }
        Ok(())
    }

    pub fn is_blacklisted(&self, address: &Address) -> bool {
        self.blacklist.contains(address)
    }

    // ------------------------------------------------------------------
    // Pause switch
    // ------------------------------------------------------------------

    /// Disable ordinary transfers. Owner only; strict transition, pausing an
    /// already-paused ledger is an error.
    pub fn pause(&mut self, caller: Address) -> Result<()> {
        self.require_owner(&caller)?;
        if self.paused {
            return Err(LedgerError::AlreadyPaused);
        }
        self.paused = true;
        info!("transfers paused");
        Ok(())
    }

    /// Re-enable ordinary transfers. Owner only; strict transition.
    pub fn unpause(&mut self, caller: Address) -> Result<()> {
        self.require_owner(&caller)?;
        if !self.paused {
            return Err(LedgerError::NotPaused);
        }
        self.paused = false;
        info!("transfers resumed");
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Write a balance, dropping zeroed entries so the table only tracks
    /// accounts that actually hold value.
    fn set_balance(&mut self, address: Address, value: Amount) {
        if value == 0 {
            self.balances.remove(&address);
        } else {
            self.balances.insert(address, value);
        }
    }
}
