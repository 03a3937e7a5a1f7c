//! In-memory store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::info;

use waybill_core::orders::{OrderDraft, validate_draft};
use waybill_core::reports::{OrderSnapshot, OrderSource, SourceError};
use waybill_shared::types::{CustomerId, OrderId, PageRequest, PageResponse};

use crate::error::StoreError;
use crate::types::{Customer, OrderRecord};

#[derive(Debug, Clone)]
struct StoredOrder {
    id: OrderId,
    customer_id: CustomerId,
    order_number: String,
    order_date: NaiveDate,
    execution_date: Option<NaiveDate>,
    charges: Vec<waybill_core::charges::ChargeLine>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct Inner {
    customers: HashMap<CustomerId, Customer>,
    orders: HashMap<OrderId, StoredOrder>,
}

/// Thread-safe in-memory store for customers and orders.
///
/// Construct one instance per process and share it behind an `Arc`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a customer with the given display name.
    pub async fn create_customer(&self, customer_name: &str) -> Result<Customer, StoreError> {
        let name = customer_name.trim();
        if name.is_empty() {
            return Err(StoreError::MissingCustomerName);
        }

        let customer = Customer {
            id: CustomerId::new(),
            customer_name: name.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.customers.insert(customer.id, customer.clone());
        info!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Returns a customer by ID.
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, StoreError> {
        let inner = self.inner.read().await;
        inner
            .customers
            .get(&id)
            .cloned()
            .ok_or(StoreError::CustomerNotFound(id))
    }

    /// Lists all customers, most recently created first.
    pub async fn list_customers(&self) -> Vec<Customer> {
        let inner = self.inner.read().await;
        let mut customers: Vec<Customer> = inner.customers.values().cloned().collect();
        customers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        customers
    }

    /// Creates an order from a validated draft.
    ///
    /// The draft is rejected wholesale on the first violation. The order
    /// number must be unique among non-deleted orders.
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderRecord, StoreError> {
        validate_draft(&draft)?;

        let mut inner = self.inner.write().await;
        if !inner.customers.contains_key(&draft.customer_id) {
            return Err(StoreError::CustomerNotFound(draft.customer_id));
        }
        if inner
            .orders
            .values()
            .any(|o| o.deleted_at.is_none() && o.order_number == draft.order_number)
        {
            return Err(StoreError::DuplicateOrderNumber(draft.order_number));
        }

        let now = Utc::now();
        let stored = StoredOrder {
            id: OrderId::new(),
            customer_id: draft.customer_id,
            order_number: draft.order_number,
            order_date: draft.order_date,
            execution_date: draft.execution_date,
            charges: draft.charges,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let record = to_record(&stored, &inner.customers);
        info!(order_id = %stored.id, order_number = %stored.order_number, "order created");
        inner.orders.insert(stored.id, stored);
        Ok(record)
    }

    /// Replaces an order with the given draft.
    ///
    /// This is a full replace: the order fields and the entire charge list
    /// are swapped atomically. There are no partial-line patch semantics.
    pub async fn update_order(
        &self,
        id: OrderId,
        draft: OrderDraft,
    ) -> Result<OrderRecord, StoreError> {
        validate_draft(&draft)?;

        let mut guard = self.inner.write().await;
        let Inner { customers, orders } = &mut *guard;
        if !customers.contains_key(&draft.customer_id) {
            return Err(StoreError::CustomerNotFound(draft.customer_id));
        }
        if orders
            .values()
            .any(|o| o.id != id && o.deleted_at.is_none() && o.order_number == draft.order_number)
        {
            return Err(StoreError::DuplicateOrderNumber(draft.order_number));
        }

        let order = orders
            .get_mut(&id)
            .filter(|o| o.deleted_at.is_none())
            .ok_or(StoreError::OrderNotFound(id))?;

        order.customer_id = draft.customer_id;
        order.order_number = draft.order_number;
        order.order_date = draft.order_date;
        order.execution_date = draft.execution_date;
        order.charges = draft.charges;
        order.updated_at = Utc::now();

        info!(order_id = %id, "order replaced");
        Ok(to_record(order, customers))
    }

    /// Returns a non-deleted order by ID.
    pub async fn get_order(&self, id: OrderId) -> Result<OrderRecord, StoreError> {
        let inner = self.inner.read().await;
        inner
            .orders
            .get(&id)
            .filter(|o| o.deleted_at.is_none())
            .map(|o| to_record(o, &inner.customers))
            .ok_or(StoreError::OrderNotFound(id))
    }

    /// Lists non-deleted orders, newest first, with optional search.
    ///
    /// The search term matches order number or customer name,
    /// case-insensitively.
    pub async fn list_orders(&self, page: &PageRequest) -> PageResponse<OrderRecord> {
        let inner = self.inner.read().await;
        let needle = page
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());

        let mut records: Vec<OrderRecord> = inner
            .orders
            .values()
            .filter(|o| o.deleted_at.is_none())
            .map(|o| to_record(o, &inner.customers))
            .filter(|r| match &needle {
                Some(needle) => {
                    r.order_number.to_lowercase().contains(needle)
                        || r.customer_name.to_lowercase().contains(needle)
                }
                None => true,
            })
            .collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = records.len();
        let data: Vec<OrderRecord> = records
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        PageResponse::new(data, page, total)
    }

    /// Number of non-deleted orders currently stored.
    pub async fn order_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner
            .orders
            .values()
            .filter(|o| o.deleted_at.is_none())
            .count()
    }

    /// Soft-deletes an order. Deleted orders never appear in lists,
    /// lookups, or reports.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let order = inner
            .orders
            .get_mut(&id)
            .filter(|o| o.deleted_at.is_none())
            .ok_or(StoreError::OrderNotFound(id))?;
        order.deleted_at = Some(Utc::now());
        info!(order_id = %id, "order soft-deleted");
        Ok(())
    }
}

fn to_record(order: &StoredOrder, customers: &HashMap<CustomerId, Customer>) -> OrderRecord {
    OrderRecord {
        id: order.id,
        customer_id: order.customer_id,
        customer_name: customers
            .get(&order.customer_id)
            .map(|c| c.customer_name.clone())
            .unwrap_or_default(),
        order_number: order.order_number.clone(),
        order_date: order.order_date,
        execution_date: order.execution_date,
        charges: order.charges.clone(),
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

#[async_trait]
impl OrderSource for MemoryStore {
    async fn fetch_in_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<OrderSnapshot>, SourceError> {
        let inner = self.inner.read().await;
        let snapshots = inner
            .orders
            .values()
            .filter(|o| o.deleted_at.is_none())
            .filter(|o| match (start, end) {
                (Some(start), Some(end)) => o
                    .execution_date
                    .is_some_and(|date| date >= start && date <= end),
                _ => true,
            })
            .map(|o| OrderSnapshot {
                order_number: o.order_number.clone(),
                execution_date: o.execution_date,
                customer_name: inner
                    .customers
                    .get(&o.customer_id)
                    .map(|c| c.customer_name.clone())
                    .unwrap_or_default(),
                charges: o.charges.clone(),
            })
            .collect();
        Ok(snapshots)
    }
}
