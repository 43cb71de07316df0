use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use storefront_core::{DomainResult, Isbn, ValueObject};

use crate::book::Book;
use crate::catalog::BookCatalog;
use crate::order::Order;

/// Fulfillment capability: apply a purchase to a book's tracked stock.
pub trait BuyBookProcess {
    fn buy_book(&mut self, book: &mut Book, amount: u32) -> DomainResult<()>;
}

/// Fulfillment that depletes the catalog entry directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectBuyBookProcess;

impl BuyBookProcess for DirectBuyBookProcess {
    fn buy_book(&mut self, book: &mut Book, amount: u32) -> DomainResult<()> {
        book.deplete(amount)
    }
}

/// Result of pricing one order: the accumulated total plus the lines that
/// could only be partially fulfilled.
///
/// `unavailable` maps each under-stocked ISBN to the number of units short.
/// Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    total_price: u64,
    unavailable: BTreeMap<Isbn, u32>,
}

impl PurchaseSummary {
    /// Total price in smallest currency unit (e.g., cents).
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// ISBN → units short, for every line that stock could not fully cover.
    pub fn unavailable(&self) -> &BTreeMap<Isbn, u32> {
        &self.unavailable
    }

    pub fn is_unavailable(&self, isbn: &Isbn) -> bool {
        self.unavailable.contains_key(isbn)
    }
}

impl ValueObject for PurchaseSummary {}

/// Purchase processor: prices an [`Order`] against a catalog, depleting stock
/// for everything that can be fulfilled.
#[derive(Debug)]
pub struct PurchaseProcessor<C, P> {
    catalog: C,
    process: P,
}

impl<C, P> PurchaseProcessor<C, P>
where
    C: BookCatalog,
    P: BuyBookProcess,
{
    pub fn new(catalog: C, process: P) -> Self {
        Self { catalog, process }
    }

    /// Post-purchase access to the catalog (stock levels after fulfillment).
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Price the order and deplete stock for what can be fulfilled.
    ///
    /// - Absent order → `Ok(None)`: an explicit early exit, not an error.
    /// - Empty order → a summary with total `0` and nothing unavailable.
    /// - Per line: an unknown ISBN is skipped (contributes nothing to total
    ///   or shortfall); a line requesting more than stock holds is fulfilled
    ///   for the available amount only and recorded in the shortfall map;
    ///   otherwise the full requested amount is fulfilled.
    ///
    /// Each fulfilled line charges `fulfilled × unit_price`; exact integer
    /// arithmetic, no rounding. Fulfillment mutates catalog entries in place.
    pub fn price_for_cart(&mut self, order: Option<&Order>) -> DomainResult<Option<PurchaseSummary>> {
        let Some(order) = order else {
            return Ok(None);
        };

        let mut total_price: u64 = 0;
        let mut unavailable: BTreeMap<Isbn, u32> = BTreeMap::new();

        for (isbn, requested) in order.lines() {
            let Some(book) = self.catalog.find_by_isbn(isbn) else {
                warn!(%isbn, requested, "order references unknown ISBN, skipping line");
                continue;
            };

            let available = book.quantity();
            let fulfilled = if available < requested {
                unavailable.insert(isbn.clone(), requested - available);
                available
            } else {
                requested
            };

            total_price += u64::from(fulfilled) * book.unit_price();
            self.process.buy_book(book, fulfilled)?;

            debug!(%isbn, requested, fulfilled, "order line priced");
        }

        Ok(Some(PurchaseSummary {
            total_price,
            unavailable,
        }))
    }
}
