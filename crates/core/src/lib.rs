//! `bahikhata-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error model, and rupee amount helpers.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{AccountId, CounterpartyId, OrderId, OrganizationId, TransactionId};
pub use money::format_rupees;
