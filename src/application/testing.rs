//! In-memory repository fakes for application-layer tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::model::{
    Customer, NewOrderLine, OrderLineView, OrderView, Product, QuantityUpdate,
};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};

#[derive(Default)]
pub struct InMemoryCustomerRepo {
    customers: Mutex<HashMap<Uuid, Customer>>,
}

impl CustomerRepository for InMemoryCustomerRepo {
    fn create(&self, name: &str, email: &str) -> Result<Customer, DomainError> {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.customers
            .lock()
            .unwrap()
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        Ok(self.customers.lock().unwrap().get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .values()
            .find(|c| c.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepo {
    products: Mutex<HashMap<Uuid, Product>>,
    /// Number of `find_all_by_id` calls, for fail-fast ordering assertions.
    pub find_all_calls: AtomicUsize,
}

impl InMemoryProductRepo {
    pub fn stock_of(&self, id: Uuid) -> Option<i32> {
        self.products.lock().unwrap().get(&id).map(|p| p.quantity)
    }
}

impl ProductRepository for InMemoryProductRepo {
    fn create(
        &self,
        name: &str,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError> {
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            quantity,
        };
        self.products
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        Ok(product)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let products = self.products.lock().unwrap();
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }

    fn update_quantity(&self, updates: &[QuantityUpdate]) -> Result<(), DomainError> {
        let mut products = self.products.lock().unwrap();
        for update in updates {
            if let Some(product) = products.get_mut(&update.product_id) {
                product.quantity = update.quantity;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepo {
    orders: Mutex<HashMap<Uuid, OrderView>>,
}

impl InMemoryOrderRepo {
    pub fn created_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

impl OrderRepository for InMemoryOrderRepo {
    fn create(
        &self,
        customer: &Customer,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderView, DomainError> {
        let order = OrderView {
            id: Uuid::new_v4(),
            customer: customer.clone(),
            created_at: Utc::now(),
            lines: lines
                .into_iter()
                .map(|line| OrderLineView {
                    id: Uuid::new_v4(),
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
        };
        self.orders.lock().unwrap().insert(order.id, order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }
}
