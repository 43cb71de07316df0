use tracing::debug;

use crate::cart::ShoppingCart;
use crate::item::Item;
use crate::rules::PriceRule;

/// Checkout calculator: a cart plus the rules that price its contents.
pub struct Checkout<C> {
    cart: C,
    rules: Vec<Box<dyn PriceRule>>,
}

impl<C: ShoppingCart> Checkout<C> {
    pub fn new(cart: C, rules: Vec<Box<dyn PriceRule>>) -> Self {
        Self { cart, rules }
    }

    /// Delegates to the cart.
    pub fn add_to_cart(&mut self, item: Item) {
        self.cart.add(item);
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    /// Total for the current cart: the sum of every rule's contribution.
    pub fn calculate(&self) -> u64 {
        let items = self.cart.items();
        let total = self
            .rules
            .iter()
            .map(|rule| rule.price_to_aggregate(&items))
            .sum();
        debug!(items = items.len(), rules = self.rules.len(), total, "cart priced");
        total
    }
}
