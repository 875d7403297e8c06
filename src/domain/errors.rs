use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer not found")]
    CustomerNotFound,

    #[error("Customer email already in use")]
    CustomerAlreadyExists,

    #[error("Product already exists")]
    ProductAlreadyExists,

    #[error("Products not found")]
    ProductsNotFound,

    #[error("Product not exists {0}")]
    ProductNotExists(Uuid),

    #[error("The quantity {requested} of product {product_id} is not available")]
    InsufficientStock { product_id: Uuid, requested: i32 },

    #[error("Order not found")]
    OrderNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}
