use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::model::Customer;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_domain(row: CustomerRow) -> Customer {
    Customer {
        id: row.id,
        name: row.name,
        email: row.email,
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn create(&self, name: &str, email: &str) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        diesel::insert_into(customers::table)
            .values(&NewCustomerRow {
                id,
                name: name.to_string(),
                email: email.to_string(),
            })
            .execute(&mut conn)?;

        Ok(Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::id.eq(id))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(to_domain))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::email.eq(email))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(to_domain))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::DieselCustomerRepository;
    use crate::domain::ports::CustomerRepository;
    use crate::infrastructure::testing::setup_db;

    #[tokio::test]
    async fn create_and_find_by_id_roundtrip() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);

        let created = repo
            .create("Alice", "alice@example.com")
            .expect("create failed");

        let found = repo
            .find_by_id(created.id)
            .expect("find failed")
            .expect("customer should exist");

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_by_email_matches_exactly() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);

        repo.create("Bob", "bob@example.com").expect("create failed");

        let found = repo
            .find_by_email("bob@example.com")
            .expect("find failed")
            .expect("customer should exist");
        assert_eq!(found.name, "Bob");

        let missing = repo
            .find_by_email("nobody@example.com")
            .expect("find should not error");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);

        let result = repo
            .find_by_id(Uuid::new_v4())
            .expect("find should not error");

        assert!(result.is_none());
    }
}
