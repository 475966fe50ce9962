use serde::{Deserialize, Serialize};

use bahikhata_core::AccountId;

/// High-level account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Bank,
    Overdraft,
    Cash,
    Cheque,
    Misc,
}

/// A money account and its last-known balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub kind: AccountKind,
    /// Balance in whole rupees. Signed: overdraft accounts go negative.
    pub balance: i64,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, kind: AccountKind, balance: i64) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            balance,
        }
    }

    /// Whether this account can cover a payment of `amount` rupees.
    pub fn can_cover(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}
