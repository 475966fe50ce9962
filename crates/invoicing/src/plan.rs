//! Invoice layout plan: the pure decision stage of generation.
//!
//! Everything the renderer draws is decided here first, so titles, rows,
//! summary figures and pagination can be asserted without parsing PDF bytes.

use bahikhata_orders::{Order, OrderType};
use bahikhata_orgs::{Logo, Organization};

use crate::words::amount_in_words;

/// Item rows drawn per page. Sized so the footer (separators, amount in
/// words, summary block) always fits under a full table.
pub const ROWS_PER_PAGE: usize = 25;

/// One row of the item table: S.N., Name, Quantity, Rate, Amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub serial: usize,
    pub name: String,
    pub quantity: i64,
    pub rate: i64,
    /// quantity × rate.
    pub amount: i64,
}

/// Fully decided invoice content, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoicePlan {
    pub title: &'static str,
    pub org_name: Option<String>,
    pub org_address: Option<String>,
    pub org_registration: Option<String>,
    pub logo: Option<Logo>,
    pub counterparty_name: String,
    pub invoice_number: String,
    pub date_text: String,
    /// Fixed placeholder until the product grows per-order payment modes.
    pub payment_mode: &'static str,
    pub rows: Vec<TableRow>,
    /// Base amount before discount and tax.
    pub subtotal: i64,
    pub total_amount: i64,
    pub received_amount: i64,
    pub total_in_words: String,
}

impl InvoicePlan {
    /// Decide the full invoice content for one order.
    pub fn from_order(order: &Order, organization: Option<&Organization>) -> Self {
        let title = match order.order_type {
            OrderType::Sell => "SALES INVOICE",
            OrderType::Buy | OrderType::Misc => "PURCHASE INVOICE",
        };

        let rows = order
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| TableRow {
                serial: i + 1,
                name: item.name.clone(),
                quantity: item.quantity,
                rate: item.unit_price,
                amount: item.subtotal(),
            })
            .collect();

        Self {
            title,
            org_name: organization.map(|org| org.name.clone()),
            org_address: organization.and_then(|org| org.address.clone()),
            org_registration: organization.and_then(|org| org.tax_registration.clone()),
            logo: organization.and_then(|org| org.logo.clone()),
            counterparty_name: order.counterparty.name.clone(),
            invoice_number: order.order_number.clone(),
            date_text: order.issued_at.format("%d/%m/%Y").to_string(),
            payment_mode: "Cash",
            rows,
            subtotal: order.base_amount,
            total_amount: order.total_amount,
            received_amount: order.received_amount(),
            total_in_words: amount_in_words(order.total_amount.max(0) as u64),
        }
    }

    /// Row slices per page. Always yields at least one (possibly empty) page.
    pub fn row_pages(&self) -> impl Iterator<Item = &[TableRow]> {
        let pages = if self.rows.is_empty() {
            vec![&self.rows[..]]
        } else {
            self.rows.chunks(ROWS_PER_PAGE).collect()
        };
        pages.into_iter()
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(ROWS_PER_PAGE).max(1)
    }

    /// Download name rule: `Invoice-<orderNumber>.pdf`.
    pub fn file_name(&self) -> String {
        format!("Invoice-{}.pdf", self.invoice_number)
    }
}
