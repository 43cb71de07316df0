//! `storefront-pricing` — shopping cart plus pluggable price rules.
//!
//! A [`Checkout`] owns a [`ShoppingCart`] and a list of [`PriceRule`]s; its
//! total is the sum of every rule's contribution over the current cart
//! contents. Both the cart and the rules are narrow capabilities so callers
//! can substitute their own storage or pricing policies.

pub mod cart;
pub mod checkout;
pub mod item;
pub mod rules;

pub use cart::{InMemoryShoppingCart, ShoppingCart};
pub use checkout::Checkout;
pub use item::{Item, ItemType};
pub use rules::{PriceRule, RegularCost};
