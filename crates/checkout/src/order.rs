use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Isbn};

/// Customer order: requested quantity per ISBN.
///
/// Lines for the same ISBN accumulate. Iteration is deterministic (sorted by
/// ISBN), though the processor's total is order-independent anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: BTreeMap<Isbn, u32>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` requested units of `isbn` to the order.
    ///
    /// A zero quantity is a caller error, caught here rather than silently
    /// carried into pricing. Negative quantities are unrepresentable.
    pub fn add_line(&mut self, isbn: Isbn, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        *self.lines.entry(isbn).or_insert(0) += quantity;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterate `(isbn, requested quantity)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (&Isbn, u32)> {
        self.lines.iter().map(|(isbn, qty)| (isbn, *qty))
    }
}
