//! Every Redis counter this service reads or writes, declared in one place.

use redis_connection::counter_key;

counter_key!(PageViewCounterKey => "counter:page_view");
counter_key!(EventCounterKey => "counter:{}"[event_type: String]);
counter_key!(ProductSalesCounterKey => "sales:product:{}"[product_id: String]);

#[cfg(test)]
mod tests {
    use redis_connection::counter::CounterKey;

    use super::*;

    #[test]
    fn test_page_view_key() {
        assert_eq!(PageViewCounterKey.key_with_args(()), "counter:page_view");
    }

    #[test]
    fn test_event_key_matches_page_view_key() {
        // The dashboard reads `counter:page_view`; tracking a `page_view`
        // event must land on the same key.
        let event_type = "page_view".to_string();
        assert_eq!(
            EventCounterKey.key_with_args((&event_type,)),
            PageViewCounterKey.key_with_args(())
        );
    }

    #[test]
    fn test_product_sales_key() {
        let product_id = "oranges".to_string();
        assert_eq!(
            ProductSalesCounterKey.key_with_args((&product_id,)),
            "sales:product:oranges"
        );
    }
}
