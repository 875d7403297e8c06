use crate::domain::errors::DomainError;
use crate::domain::model::Customer;
use crate::domain::ports::CustomerRepository;

pub struct CustomerService<C> {
    customers: C,
}

impl<C: CustomerRepository> CustomerService<C> {
    pub fn new(customers: C) -> Self {
        Self { customers }
    }

    /// Registers a new customer. The email address is unique across the store.
    pub fn create_customer(&self, name: &str, email: &str) -> Result<Customer, DomainError> {
        if self.customers.find_by_email(email)?.is_some() {
            return Err(DomainError::CustomerAlreadyExists);
        }
        self.customers.create(name, email)
    }
}
