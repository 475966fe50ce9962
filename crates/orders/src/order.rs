use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bahikhata_core::{AccountId, OrderId, TransactionId};
use bahikhata_parties::Counterparty;

/// Order type flag.
///
/// The backend sends these uppercase; BUY and SELL drive invoice titles and
/// balance checking, MISC is the residual category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Buy,
    Sell,
    Misc,
}

/// Payment status of the order as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

/// One order line: item name, quantity, unit price in whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
}

impl LineItem {
    /// Line subtotal: quantity × unit price.
    pub fn subtotal(&self) -> i64 {
        self.quantity.saturating_mul(self.unit_price)
    }
}

/// A payment transaction already applied to the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Amount in whole rupees.
    pub amount: i64,
    pub account_id: AccountId,
    pub paid_at: DateTime<Utc>,
}

/// One order as fetched from the backend.
///
/// Amount fields are whole rupees. `total_amount = base_amount - discount +
/// tax` is the backend's documented breakdown; this slice surfaces
/// [`Order::is_total_consistent`] but never rejects an order over it — the
/// backend stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub order_type: OrderType,
    pub items: Vec<LineItem>,
    pub discount: i64,
    pub tax: i64,
    pub base_amount: i64,
    pub total_amount: i64,
    pub payment_status: PaymentStatus,
    pub counterparty: Counterparty,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub issued_at: DateTime<Utc>,
}

impl Order {
    /// Sum of the line subtotals.
    pub fn items_subtotal(&self) -> i64 {
        self.items.iter().fold(0i64, |acc, item| acc.saturating_add(item.subtotal()))
    }

    /// Amount received so far: the sum of recorded transactions, or the order
    /// total when no transactions were recorded (settled-on-the-spot sale).
    pub fn received_amount(&self) -> i64 {
        if self.transactions.is_empty() {
            return self.total_amount;
        }
        self.transactions
            .iter()
            .fold(0i64, |acc, txn| acc.saturating_add(txn.amount))
    }

    /// Consistency check for the documented amount breakdown.
    ///
    /// `total = base - discount + tax` is asserted by the backend, not
    /// enforced here. Callers may warn when this returns false.
    pub fn is_total_consistent(&self) -> bool {
        self.base_amount
            .checked_sub(self.discount)
            .and_then(|n| n.checked_add(self.tax))
            .is_some_and(|computed| computed == self.total_amount)
    }
}
