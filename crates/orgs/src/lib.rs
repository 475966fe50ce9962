//! Organization domain module.
//!
//! The organization is the invoice issuer: its name, address and tax
//! registration number form the invoice header, and its logo (when present)
//! is embedded top-right.

pub mod organization;

pub use organization::{Logo, LogoFormat, Organization};
