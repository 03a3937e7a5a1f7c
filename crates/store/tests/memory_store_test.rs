//! Integration tests for the in-memory store.

use chrono::NaiveDate;

use waybill_core::charges::ChargeLine;
use waybill_core::currency::Currency;
use waybill_core::orders::OrderDraft;
use waybill_core::reports::OrderSource;
use waybill_shared::types::{CustomerId, OrderId, PageRequest};
use waybill_store::{MemoryStore, StoreError};

fn charge(description: &str, quantity: f64) -> ChargeLine {
    ChargeLine {
        description: description.to_string(),
        quantity,
        sale_rate: 100.0,
        cost_rate: 80.0,
        vat_percent: 5.0,
        currency: Currency::Usd,
    }
}

fn draft(customer_id: CustomerId, order_number: &str, execution_date: Option<&str>) -> OrderDraft {
    OrderDraft {
        customer_id,
        order_number: order_number.to_string(),
        order_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        execution_date: execution_date.map(|d| d.parse().unwrap()),
        charges: vec![charge("Ocean freight", 2.0)],
    }
}

async fn store_with_customer() -> (MemoryStore, CustomerId) {
    let store = MemoryStore::new();
    let customer = store.create_customer("Gulf Shipping LLC").await.unwrap();
    (store, customer.id)
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_create_and_get_customer() {
    let (store, customer_id) = store_with_customer().await;
    let customer = store.get_customer(customer_id).await.unwrap();
    assert_eq!(customer.customer_name, "Gulf Shipping LLC");
}

#[tokio::test]
async fn test_empty_customer_name_rejected() {
    let store = MemoryStore::new();
    assert!(matches!(
        store.create_customer("   ").await,
        Err(StoreError::MissingCustomerName)
    ));
}

// ============================================================================
// Order creation
// ============================================================================

#[tokio::test]
async fn test_create_order_resolves_customer_name() {
    let (store, customer_id) = store_with_customer().await;
    let record = store
        .create_order(draft(customer_id, "ORD-1001", Some("2024-02-01")))
        .await
        .unwrap();

    assert_eq!(record.order_number, "ORD-1001");
    assert_eq!(record.customer_name, "Gulf Shipping LLC");
    assert_eq!(record.charges.len(), 1);
}

#[tokio::test]
async fn test_create_order_unknown_customer_rejected() {
    let store = MemoryStore::new();
    let err = store
        .create_order(draft(CustomerId::new(), "ORD-1", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::CustomerNotFound(_)));
}

#[tokio::test]
async fn test_duplicate_order_number_rejected() {
    let (store, customer_id) = store_with_customer().await;
    store
        .create_order(draft(customer_id, "ORD-1", None))
        .await
        .unwrap();
    let err = store
        .create_order(draft(customer_id, "ORD-1", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateOrderNumber(_)));
}

#[tokio::test]
async fn test_zero_quantity_rejected_at_creation() {
    let (store, customer_id) = store_with_customer().await;
    let mut bad = draft(customer_id, "ORD-1", None);
    bad.charges[0].quantity = 0.0;

    let err = store.create_order(bad).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "charges[0].quantity must be greater than 0"
    );
}

// ============================================================================
// Full-replace update
// ============================================================================

#[tokio::test]
async fn test_update_replaces_entire_charge_set() {
    let (store, customer_id) = store_with_customer().await;
    let mut initial = draft(customer_id, "ORD-1", None);
    initial.charges = vec![charge("Ocean freight", 2.0), charge("Handling", 1.0)];
    let record = store.create_order(initial).await.unwrap();

    let mut replacement = draft(customer_id, "ORD-1", Some("2024-03-01"));
    replacement.charges = vec![charge("Customs clearance", 3.0)];
    let updated = store.update_order(record.id, replacement).await.unwrap();

    // Old lines are gone, not merged
    assert_eq!(updated.charges.len(), 1);
    assert_eq!(updated.charges[0].description, "Customs clearance");
    assert_eq!(
        updated.execution_date,
        Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    );

    let reread = store.get_order(record.id).await.unwrap();
    assert_eq!(reread.charges.len(), 1);
}

#[tokio::test]
async fn test_update_keeps_order_number_unique() {
    let (store, customer_id) = store_with_customer().await;
    store
        .create_order(draft(customer_id, "ORD-1", None))
        .await
        .unwrap();
    let second = store
        .create_order(draft(customer_id, "ORD-2", None))
        .await
        .unwrap();

    let err = store
        .update_order(second.id, draft(customer_id, "ORD-1", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateOrderNumber(_)));

    // Keeping its own number is fine
    store
        .update_order(second.id, draft(customer_id, "ORD-2", None))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_missing_order_fails() {
    let (store, customer_id) = store_with_customer().await;
    let err = store
        .update_order(OrderId::new(), draft(customer_id, "ORD-9", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::OrderNotFound(_)));
}

// ============================================================================
// Listing and soft delete
// ============================================================================

#[tokio::test]
async fn test_list_excludes_soft_deleted() {
    let (store, customer_id) = store_with_customer().await;
    let kept = store
        .create_order(draft(customer_id, "ORD-1", None))
        .await
        .unwrap();
    let deleted = store
        .create_order(draft(customer_id, "ORD-2", None))
        .await
        .unwrap();

    store.delete_order(deleted.id).await.unwrap();

    let page = store.list_orders(&PageRequest::default()).await;
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].id, kept.id);

    assert!(matches!(
        store.get_order(deleted.id).await,
        Err(StoreError::OrderNotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let (store, customer_id) = store_with_customer().await;
    let record = store
        .create_order(draft(customer_id, "ORD-1", None))
        .await
        .unwrap();

    store.delete_order(record.id).await.unwrap();
    assert!(matches!(
        store.delete_order(record.id).await,
        Err(StoreError::OrderNotFound(_))
    ));
}

#[tokio::test]
async fn test_search_matches_order_number_and_customer_name() {
    let (store, customer_id) = store_with_customer().await;
    store
        .create_order(draft(customer_id, "ORD-ABC", None))
        .await
        .unwrap();
    store
        .create_order(draft(customer_id, "ORD-XYZ", None))
        .await
        .unwrap();

    let by_number = store
        .list_orders(&PageRequest {
            search: Some("abc".to_string()),
            ..PageRequest::default()
        })
        .await;
    assert_eq!(by_number.meta.total, 1);

    let by_customer = store
        .list_orders(&PageRequest {
            search: Some("gulf".to_string()),
            ..PageRequest::default()
        })
        .await;
    assert_eq!(by_customer.meta.total, 2);
}

#[tokio::test]
async fn test_pagination_slices_results() {
    let (store, customer_id) = store_with_customer().await;
    for i in 0..5 {
        store
            .create_order(draft(customer_id, &format!("ORD-{i}"), None))
            .await
            .unwrap();
    }

    let page = store
        .list_orders(&PageRequest {
            page: 2,
            per_page: 2,
            search: None,
        })
        .await;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.total_pages, 3);
}

// ============================================================================
// OrderSource contract
// ============================================================================

#[tokio::test]
async fn test_fetch_in_range_is_inclusive_and_skips_dateless() {
    let (store, customer_id) = store_with_customer().await;
    store
        .create_order(draft(customer_id, "ORD-JAN", Some("2024-01-01")))
        .await
        .unwrap();
    store
        .create_order(draft(customer_id, "ORD-JUN", Some("2024-06-01")))
        .await
        .unwrap();
    store
        .create_order(draft(customer_id, "ORD-NODATE", None))
        .await
        .unwrap();

    let in_range = store
        .fetch_in_range(
            Some("2024-01-01".parse().unwrap()),
            Some("2024-06-01".parse().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(in_range.len(), 2);

    let narrowed = store
        .fetch_in_range(
            Some("2024-03-01".parse().unwrap()),
            Some("2024-12-31".parse().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].order_number, "ORD-JUN");
}

#[tokio::test]
async fn test_fetch_without_bounds_returns_all_non_deleted() {
    let (store, customer_id) = store_with_customer().await;
    store
        .create_order(draft(customer_id, "ORD-1", Some("2024-01-01")))
        .await
        .unwrap();
    let gone = store
        .create_order(draft(customer_id, "ORD-2", None))
        .await
        .unwrap();
    store.delete_order(gone.id).await.unwrap();

    let snapshots = store.fetch_in_range(None, None).await.unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].customer_name, "Gulf Shipping LLC");
}
