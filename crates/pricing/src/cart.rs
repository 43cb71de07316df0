use crate::item::Item;

/// Cart capability: hold the items a checkout will price.
pub trait ShoppingCart {
    fn add(&mut self, item: Item);

    /// Snapshot of the current contents, in insertion order.
    fn items(&self) -> Vec<Item>;

    fn number_of_items(&self) -> usize;
}

/// In-memory cart. Stands in for whatever storage a deployment wires up.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShoppingCart {
    items: Vec<Item>,
}

impl InMemoryShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShoppingCart for InMemoryShoppingCart {
    fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn number_of_items(&self) -> usize {
        self.items.len()
    }
}
