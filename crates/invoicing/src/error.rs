//! Invoicing error model.

use thiserror::Error;

/// Errors surfaced by invoice generation and export.
///
/// Whole-document drawing failures collapse into the one generic
/// `Generation` variant shown to users; the underlying cause stays attached
/// as the error source for logs.
#[derive(Debug, Error)]
pub enum InvoicingError {
    #[error("failed to generate PDF")]
    Generation(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write invoice file")]
    Io(#[from] std::io::Error),
}

impl InvoicingError {
    pub(crate) fn generation(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Generation(Box::new(err))
    }
}
