//! Generated invoice export surface.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use bahikhata_orders::Order;
use bahikhata_orgs::Organization;

use crate::error::InvoicingError;
use crate::plan::InvoicePlan;
use crate::render;

/// A fully rendered invoice PDF.
///
/// Holds the document bytes plus the canonical download name
/// (`Invoice-<orderNumber>.pdf`). Printing is a shell/user-agent concern;
/// callers hand these bytes to whatever viewer they own.
#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    bytes: Vec<u8>,
    file_name: String,
}

impl InvoiceDocument {
    /// Render one order (and optionally the issuing organization) to PDF.
    pub fn generate(
        order: &Order,
        organization: Option<&Organization>,
    ) -> Result<Self, InvoicingError> {
        let plan = InvoicePlan::from_order(order, organization);
        debug!(
            invoice = %plan.invoice_number,
            pages = plan.page_count(),
            rows = plan.rows.len(),
            "rendering invoice"
        );
        let bytes = render::render(&plan)?;
        Ok(Self {
            bytes,
            file_name: plan.file_name(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Canonical download name: `Invoice-<orderNumber>.pdf`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Write the document at an explicit path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InvoicingError> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }

    /// Write the document under `dir` using the canonical file name; returns
    /// the full path written.
    pub fn save_into(&self, dir: impl AsRef<Path>) -> Result<PathBuf, InvoicingError> {
        let path = dir.as_ref().join(&self.file_name);
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bahikhata_core::{CounterpartyId, OrderId, OrganizationId};
    use bahikhata_orders::{LineItem, OrderType, PaymentStatus};
    use bahikhata_orgs::Logo;
    use bahikhata_parties::{Counterparty, CounterpartyKind};
    use chrono::{TimeZone, Utc};

    fn test_order(item_count: usize) -> Order {
        let items: Vec<LineItem> = (0..item_count)
            .map(|i| LineItem {
                name: format!("Item {i}"),
                quantity: 2,
                unit_price: 150,
            })
            .collect();
        let base: i64 = items.iter().map(LineItem::subtotal).sum();
        Order {
            id: OrderId::new(),
            order_number: "SO-88".to_string(),
            order_type: OrderType::Sell,
            items,
            discount: 0,
            tax: 0,
            base_amount: base,
            total_amount: base,
            payment_status: PaymentStatus::Paid,
            counterparty: Counterparty::new(
                CounterpartyId::new(),
                "Machhapuchhre Stores",
                CounterpartyKind::Customer,
            ),
            transactions: Vec::new(),
            issued_at: Utc.with_ymd_and_hms(2024, 4, 13, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn generated_document_is_a_pdf() {
        let doc = InvoiceDocument::generate(&test_order(3), None).unwrap();
        assert!(doc.bytes().starts_with(b"%PDF"));
        assert_eq!(doc.file_name(), "Invoice-SO-88.pdf");
    }

    #[test]
    fn long_orders_render_across_pages() {
        let doc = InvoiceDocument::generate(&test_order(60), None).unwrap();
        assert!(doc.bytes().starts_with(b"%PDF"));
    }

    #[test]
    fn broken_logo_bytes_do_not_fail_generation() {
        // Subscriber wired so the logo warning goes through the shared setup.
        bahikhata_observability::init();

        let mut org = Organization::new(OrganizationId::new(), "Everest Traders");
        org.logo = Some(Logo::new("logo.png", vec![0xde, 0xad, 0xbe, 0xef]));

        let doc = InvoiceDocument::generate(&test_order(1), Some(&org)).unwrap();
        assert!(doc.bytes().starts_with(b"%PDF"));
    }

    #[test]
    fn save_into_uses_the_canonical_name() {
        let doc = InvoiceDocument::generate(&test_order(1), None).unwrap();
        let dir = std::env::temp_dir();
        let path = doc.save_into(&dir).unwrap();
        assert!(path.ends_with("Invoice-SO-88.pdf"));
        assert_eq!(fs::read(&path).unwrap(), doc.bytes());
        let _ = fs::remove_file(path);
    }
}
