//! Karat - a fungible token ledger with administrative controls
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Ledger
//! - [`ledger`] - The ledger state machine: balances, supply, ownership,
//!   blacklist, fees, and the pause switch
//! - [`fees`] - Transfer fee computation
//!
//! ## Primitives
//! - [`address`] - Account addresses and the distinguished zero address
//! - [`amount`] - Token amounts and 18-decimal fixed-point scaling
//!
//! ## Integration
//! - [`shared`] - Mutex-guarded handle for concurrent hosts
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! The host environment supplies a caller identity for every operation and
//! is expected to apply operations one at a time; each operation either
//! completes in full or fails with a [`error::LedgerError`] leaving the
//! state untouched.

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod fees;
pub mod ledger;

// ============================================================================
// Primitives
// ============================================================================
pub mod address;
pub mod amount;

// ============================================================================
// Integration
// ============================================================================
pub mod shared;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;

pub use address::{Address, ZERO_ADDRESS};
pub use amount::{Amount, DECIMALS, UNITS_PER_TOKEN};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use shared::SharedLedger;
