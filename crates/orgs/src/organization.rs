use serde::{Deserialize, Serialize};

use bahikhata_core::OrganizationId;

/// Raster format of an organization logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoFormat {
    Png,
    Jpeg,
}

/// Organization logo: the backend reference string plus the fetched bytes.
///
/// Only the reference travels on the wire; the caller fetches the image and
/// attaches the bytes before asking for an invoice. The raster format is
/// picked by inspecting the reference, falling back to JPEG when nothing
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub reference: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Logo {
    pub fn new(reference: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            reference: reference.into(),
            bytes,
        }
    }

    /// Pick the raster format from the reference string.
    pub fn format(&self) -> LogoFormat {
        let lower = self.reference.to_ascii_lowercase();
        if lower.ends_with(".png") || lower.contains(".png?") {
            LogoFormat::Png
        } else {
            LogoFormat::Jpeg
        }
    }
}

/// The invoice-issuing organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub logo: Option<Logo>,
    /// Address or short description shown under the name.
    #[serde(default)]
    pub address: Option<String>,
    /// Tax registration (PAN/VAT) number.
    #[serde(default)]
    pub tax_registration: Option<String>,
}

impl Organization {
    pub fn new(id: OrganizationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo: None,
            address: None,
            tax_registration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_reference_selects_png() {
        let logo = Logo::new("logos/acme.PNG", Vec::new());
        assert_eq!(logo.format(), LogoFormat::Png);

        let logo = Logo::new("https://cdn.example.com/logo.png?v=3", Vec::new());
        assert_eq!(logo.format(), LogoFormat::Png);
    }

    #[test]
    fn unknown_reference_falls_back_to_jpeg() {
        assert_eq!(Logo::new("logos/acme.jpg", Vec::new()).format(), LogoFormat::Jpeg);
        assert_eq!(Logo::new("logos/acme", Vec::new()).format(), LogoFormat::Jpeg);
        assert_eq!(Logo::new("", Vec::new()).format(), LogoFormat::Jpeg);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = format!(r#"{{"id":"{}","name":"Himal Suppliers"}}"#, OrganizationId::new());
        let org: Organization = serde_json::from_str(&json).unwrap();
        assert!(org.logo.is_none());
        assert!(org.address.is_none());
        assert!(org.tax_registration.is_none());
    }
}
