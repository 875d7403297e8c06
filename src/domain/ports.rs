use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::DomainError;
use super::model::{Customer, NewOrderLine, OrderView, Product, QuantityUpdate};

pub trait CustomerRepository: Send + Sync + 'static {
    fn create(&self, name: &str, email: &str) -> Result<Customer, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(
        &self,
        name: &str,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
    /// Ids with no matching product are silently omitted from the result.
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;
    /// Overwrites each product's stored quantity with the given value.
    fn update_quantity(&self, updates: &[QuantityUpdate]) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn create(
        &self,
        customer: &Customer,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderView, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;
}
