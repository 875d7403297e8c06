use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::model::Product;
use crate::domain::ports::ProductRepository;

pub struct ProductService<P> {
    products: P,
}

impl<P: ProductRepository> ProductService<P> {
    pub fn new(products: P) -> Self {
        Self { products }
    }

    /// Adds a product to the catalog. Product names are unique.
    pub fn create_product(
        &self,
        name: &str,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError> {
        if self.products.find_by_name(name)?.is_some() {
            return Err(DomainError::ProductAlreadyExists);
        }
        self.products.create(name, price, quantity)
    }
}
