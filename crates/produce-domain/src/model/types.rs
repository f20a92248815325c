//! Core type definitions for the inventory model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single produce item held in inventory.
///
/// The serialized field names match the JSON format clients already send
/// (`"Produce Code"`, `"Name"`, `"Unit Price"`). Missing fields decode as
/// empty strings so that an incomplete record still reaches validation and
/// is rejected with a field-level message instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Produce {
    /// Sixteen alphanumeric characters in four hyphen-separated groups.
    #[serde(rename = "Produce Code", default)]
    pub code: String,
    /// Alphanumeric label, spaces allowed between words.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Decimal amount with at most two fractional digits, kept as text.
    #[serde(rename = "Unit Price", default)]
    pub unit_price: String,
}

impl Produce {
    /// Creates a new Produce record.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit_price: unit_price.into(),
        }
    }

    /// Returns true for the empty record carried by "not found" outcomes.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.name.is_empty() && self.unit_price.is_empty()
    }
}

impl fmt::Display for Produce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.code, self.name, self.unit_price)
    }
}

/// The inventory a freshly started service is seeded with.
pub fn default_inventory() -> Vec<Produce> {
    vec![
        Produce::new("A12T-4GH7-QPL9-3N4M", "Lettuce", "3.46"),
        Produce::new("E5T6-9UI3-TH15-QR88", "Peach", "2.99"),
        Produce::new("YRT6-72AS-K736-L4AR", "Green Pepper", "0.79"),
        Produce::new("TQ4C-VV6T-75ZX-1RMR", "Gala Apple", "3.59"),
    ]
}
