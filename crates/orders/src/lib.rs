//! Orders domain module.
//!
//! An order is one BUY (purchase from a vendor) or SELL (sale to a customer)
//! with its line items, amount breakdown and the payment transactions applied
//! so far. MISC is the residual category. Orders are fetched from the backend
//! and treated read-only here (no IO, no HTTP, no storage).

pub mod order;

pub use order::{LineItem, Order, OrderType, PaymentStatus, Transaction};
