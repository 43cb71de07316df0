//! Integration tests for the full purchase pipeline.
//!
//! Tests: Order → Catalog lookup → Fulfillment → PurchaseSummary
//!
//! Verifies:
//! - Pricing, depletion and shortfall bookkeeping against the shipped
//!   in-memory catalog and direct fulfillment (no fakes)
//! - The summary serializes into a stable receipt payload

#[cfg(test)]
mod tests {
    use storefront_core::Isbn;

    use crate::{Book, DirectBuyBookProcess, InMemoryBookCatalog, Order, PurchaseProcessor};

    fn isbn(raw: &str) -> Isbn {
        Isbn::new(raw).unwrap()
    }

    fn seeded_processor() -> PurchaseProcessor<InMemoryBookCatalog, DirectBuyBookProcess> {
        storefront_observability::init();

        let mut catalog = InMemoryBookCatalog::new();
        catalog.add_book(Book::new(isbn("ISBN1"), 2000, 10));
        catalog.add_book(Book::new(isbn("ISBN2"), 1500, 5));
        catalog.add_book(Book::new(isbn("ISBN-LOW"), 3000, 2));
        PurchaseProcessor::new(catalog, DirectBuyBookProcess)
    }

    #[test]
    fn mixed_order_prices_depletes_and_reports_shortfall() {
        let mut processor = seeded_processor();

        let mut order = Order::new();
        order.add_line(isbn("ISBN1"), 2).unwrap();
        order.add_line(isbn("ISBN2"), 5).unwrap();
        order.add_line(isbn("ISBN-LOW"), 5).unwrap();

        let summary = processor.price_for_cart(Some(&order)).unwrap().unwrap();

        // 2 * $20 + 5 * $15 + 2 * $30 (clamped) = $175.00
        assert_eq!(summary.total_price(), 17500);
        assert_eq!(summary.unavailable().len(), 1);
        assert_eq!(summary.unavailable()[&isbn("ISBN-LOW")], 3);

        let catalog = processor.catalog();
        assert_eq!(catalog.book(&isbn("ISBN1")).unwrap().quantity(), 8);
        assert_eq!(catalog.book(&isbn("ISBN2")).unwrap().quantity(), 0);
        assert_eq!(catalog.book(&isbn("ISBN-LOW")).unwrap().quantity(), 0);
    }

    #[test]
    fn sequential_orders_see_depleted_stock() {
        let mut processor = seeded_processor();

        let mut first = Order::new();
        first.add_line(isbn("ISBN2"), 4).unwrap();
        let summary = processor.price_for_cart(Some(&first)).unwrap().unwrap();
        assert_eq!(summary.total_price(), 6000);
        assert!(summary.unavailable().is_empty());

        // Only one unit left for the second order.
        let mut second = Order::new();
        second.add_line(isbn("ISBN2"), 3).unwrap();
        let summary = processor.price_for_cart(Some(&second)).unwrap().unwrap();
        assert_eq!(summary.total_price(), 1500);
        assert_eq!(summary.unavailable()[&isbn("ISBN2")], 2);
    }

    #[test]
    fn summary_serializes_to_receipt_payload() {
        let mut processor = seeded_processor();

        let mut order = Order::new();
        order.add_line(isbn("ISBN-LOW"), 5).unwrap();

        let summary = processor.price_for_cart(Some(&order)).unwrap().unwrap();
        let payload = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "total_price": 6000,
                "unavailable": { "ISBN-LOW": 3 }
            })
        );
    }
}
