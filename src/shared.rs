//! Shared-ledger handle for concurrent hosts
//!
//! The ledger assumes its operations are applied one at a time. Hosts that
//! run on multiple threads get that serialization from a single mutex around
//! the whole state, so no interleaved partial update is ever observable.

use crate::address::Address;
use crate::config::LedgerConfig;
use crate::error::Result;
use crate::ledger::Ledger;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A cloneable, thread-safe handle to a single ledger instance.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(deployer: Address) -> Self {
        Self::from_ledger(Ledger::new(deployer))
    }

    pub fn with_config(deployer: Address, config: &LedgerConfig) -> Result<Self> {
        Ok(Self::from_ledger(Ledger::with_config(deployer, config)?))
    }

    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Lock the ledger for a sequence of operations. The guard holds the
    /// lock until dropped; keep the critical section short.
    pub fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::address_from_string;
    use std::thread;

    #[test]
    fn test_concurrent_transfers_conserve_supply() {
        let deployer = address_from_string("deployer");
        let shared = SharedLedger::new(deployer);
        let sink = address_from_string("sink");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.lock().transfer(deployer, sink, 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ledger = shared.lock();
        assert_eq!(ledger.balance_of(&sink), 800);
        assert_eq!(ledger.balance_sum(), ledger.total_supply());
    }

    #[test]
    fn test_handles_share_one_ledger() {
        let deployer = address_from_string("deployer");
        let shared = SharedLedger::new(deployer);
        let other = shared.clone();

        shared.lock().pause(deployer).unwrap();
        assert!(other.lock().is_paused());
    }
}
