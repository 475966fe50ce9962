//! Invoice generation module.
//!
//! Turns one [`bahikhata_orders::Order`] (plus the issuing organization) into
//! a printable A4 PDF invoice. Generation happens in two stages:
//!
//! 1. [`InvoicePlan`] — the pure layout decision: title, header blocks, table
//!    rows, summary figures and the amount-in-words sentence, already split
//!    into pages. No drawing, fully testable.
//! 2. [`InvoiceDocument`] — renders a plan with `printpdf` and exposes the
//!    bytes, a `save` operation and the canonical download file name.
//!
//! Logo problems are logged and skipped; any other failure surfaces as the
//! generic [`InvoicingError::Generation`].

pub mod document;
pub mod error;
pub mod plan;
pub mod words;

mod render;

pub use document::InvoiceDocument;
pub use error::InvoicingError;
pub use plan::{InvoicePlan, TableRow};
pub use words::amount_in_words;
