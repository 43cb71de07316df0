use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Isbn};

/// Catalog entry: a book with its unit price and tracked stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    quantity: u32,
}

impl Book {
    pub fn new(isbn: Isbn, unit_price: u64, quantity: u32) -> Self {
        Self {
            isbn,
            unit_price,
            quantity,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Remove `amount` units from tracked stock.
    ///
    /// This is the only stock mutation; stock never goes negative.
    pub fn deplete(&mut self, amount: u32) -> DomainResult<()> {
        if amount > self.quantity {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        self.quantity -= amount;
        Ok(())
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}
