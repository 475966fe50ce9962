//! Accounts domain module.
//!
//! Money accounts (bank, overdraft, cash drawer, cheque ledger, misc) with
//! their current balances as reported by the backend. This slice reads
//! balances to gate payments; it never mutates them.

pub mod account;

pub use account::{Account, AccountKind};
