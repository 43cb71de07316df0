//! `storefront-checkout` — purchase-cart pricing and inventory depletion.
//!
//! The central operation is [`PurchaseProcessor::price_for_cart`]: given an
//! [`Order`] (requested quantity per ISBN) it resolves each line through a
//! [`BookCatalog`], fulfills what stock allows via a [`BuyBookProcess`], and
//! returns a [`PurchaseSummary`] carrying the total price plus the lines that
//! could only be partially fulfilled.
//!
//! Both collaborators are single-method capabilities so tests (and callers
//! with their own storage) can substitute fakes.

pub mod book;
pub mod catalog;
pub mod order;
pub mod processor;

#[cfg(test)]
mod integration_tests;

pub use book::Book;
pub use catalog::{BookCatalog, InMemoryBookCatalog};
pub use order::Order;
pub use processor::{BuyBookProcess, DirectBuyBookProcess, PurchaseProcessor, PurchaseSummary};
