use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

/// One (product, quantity) pair as supplied by the caller of CreateOrder.
#[derive(Debug, Clone)]
pub struct OrderLineRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// A line ready to be persisted; `unit_price` is the catalog price snapshotted
/// at order time and is never re-read afterwards.
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer: Customer,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLineView>,
}

/// Absolute stock level to store for a product (not a delta).
#[derive(Debug, Clone)]
pub struct QuantityUpdate {
    pub product_id: Uuid,
    pub quantity: i32,
}
