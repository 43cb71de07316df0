use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Broad item category, used by rules that charge per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Electronic,
    Other,
}

/// Cart line: what is being bought, how many, and at what unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    item_type: ItemType,
    name: String,
    quantity: u32,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
}

impl Item {
    pub fn new(item_type: ItemType, name: impl Into<String>, quantity: u32, unit_price: u64) -> Self {
        Self {
            item_type,
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// `quantity × unit price`, exact integer arithmetic.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

impl ValueObject for Item {}
