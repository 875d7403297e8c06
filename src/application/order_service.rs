use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::model::{NewOrderLine, OrderLineRequest, OrderView, QuantityUpdate};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};

/// Orchestrates order creation across the customer, product and order
/// repositories. All checks run before anything is written; the order insert
/// and the stock write-back are two separate repository calls with no
/// transaction spanning them, so a stock-update failure after a successful
/// insert leaves the order in place.
pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    pub fn create_order(
        &self,
        customer_id: Uuid,
        requested: Vec<OrderLineRequest>,
    ) -> Result<OrderView, DomainError> {
        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(DomainError::CustomerNotFound)?;

        let ids: Vec<Uuid> = requested.iter().map(|line| line.product_id).collect();
        let found = self.products.find_all_by_id(&ids)?;
        if found.is_empty() {
            return Err(DomainError::ProductsNotFound);
        }

        let found_ids: HashSet<Uuid> = found.iter().map(|product| product.id).collect();
        if let Some(missing) = requested
            .iter()
            .find(|line| !found_ids.contains(&line.product_id))
        {
            return Err(DomainError::ProductNotExists(missing.product_id));
        }

        let by_id: HashMap<Uuid, _> = found.iter().map(|product| (product.id, product)).collect();

        // Every requested id is present in `by_id` at this point; stock is
        // checked across all lines before any line is built.
        let mut lines = Vec::with_capacity(requested.len());
        let mut updates = Vec::with_capacity(requested.len());
        for line in &requested {
            let product = by_id
                .get(&line.product_id)
                .ok_or(DomainError::ProductNotExists(line.product_id))?;
            if product.quantity < line.quantity {
                return Err(DomainError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity,
                });
            }
            lines.push(NewOrderLine {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: product.price.clone(),
            });
            updates.push(QuantityUpdate {
                product_id: line.product_id,
                quantity: product.quantity - line.quantity,
            });
        }

        let order = self.orders.create(&customer, lines)?;

        self.products.update_quantity(&updates)?;

        Ok(order)
    }

    pub fn get_order(&self, id: Uuid) -> Result<OrderView, DomainError> {
        self.orders.find_by_id(id)?.ok_or(DomainError::OrderNotFound)
    }
}
