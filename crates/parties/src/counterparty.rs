use serde::{Deserialize, Serialize};

use bahikhata_core::CounterpartyId;

/// Counterparty kind: customer (sales side) or vendor (purchase side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyKind {
    Customer,
    Vendor,
}

/// Contact information for a counterparty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A counterparty attached to an order.
///
/// The invoice party block prints `name`; everything else is carried for the
/// surrounding pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: CounterpartyId,
    pub name: String,
    pub kind: CounterpartyKind,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Counterparty {
    pub fn new(id: CounterpartyId, name: impl Into<String>, kind: CounterpartyKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            contact: ContactInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&CounterpartyKind::Vendor).unwrap();
        assert_eq!(json, r#""vendor""#);
    }

    #[test]
    fn contact_info_is_optional_on_the_wire() {
        let json = format!(
            r#"{{"id":"{}","name":"Himal Traders","kind":"customer"}}"#,
            CounterpartyId::new()
        );
        let party: Counterparty = serde_json::from_str(&json).unwrap();
        assert_eq!(party.contact, ContactInfo::default());
    }
}
