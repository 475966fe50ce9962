//! Counterparty domain module (customers and vendors).
//!
//! A counterparty is the other side of an order: the customer on a sale,
//! the vendor on a purchase. Records are fetched from the backend and used
//! read-only by this slice (no IO, no HTTP, no storage).

pub mod counterparty;

pub use counterparty::{ContactInfo, Counterparty, CounterpartyKind};
