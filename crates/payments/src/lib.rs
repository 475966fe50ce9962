//! Payment validation module.
//!
//! Pure read-side checks that run before a payment is submitted to the
//! backend: can each targeted account cover the amount asked of it? Nothing
//! here mutates a balance; the backend is the source of truth.

pub mod validate;

pub use validate::{
    BalanceCheck, PaymentRequest, ShortfallRecord, account_total_required, can_account_afford,
    validate_account_balances,
};
