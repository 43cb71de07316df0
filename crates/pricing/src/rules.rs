use crate::item::Item;

/// Pricing capability: one rule's contribution to the aggregate total.
///
/// Rules see the whole cart so they can price across lines (per-line
/// subtotals, category surcharges, delivery tiers and the like).
pub trait PriceRule {
    fn price_to_aggregate(&self, items: &[Item]) -> u64;
}

/// The plain per-line subtotal: `Σ quantity × unit price`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularCost;

impl PriceRule for RegularCost {
    fn price_to_aggregate(&self, items: &[Item]) -> u64 {
        items.iter().map(Item::subtotal).sum()
    }
}
