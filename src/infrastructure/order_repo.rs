use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::model::{Customer, NewOrderLine, OrderLineView, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, order_lines, orders};

use super::models::{CustomerRow, NewOrderLineRow, NewOrderRow, OrderLineRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    /// Inserts the order and its lines in one transaction. Stock write-back is
    /// a separate repository concern and is not part of this transaction.
    fn create(
        &self,
        customer: &Customer,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderView, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let order_id = Uuid::new_v4();
            diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: order_id,
                    customer_id: customer.id,
                })
                .execute(conn)?;

            let rows: Vec<NewOrderLineRow> = lines
                .into_iter()
                .map(|line| NewOrderLineRow {
                    id: Uuid::new_v4(),
                    order_id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect();
            diesel::insert_into(order_lines::table)
                .values(&rows)
                .execute(conn)?;

            // Reload for the database-assigned timestamp.
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .select(OrderRow::as_select())
                .first(conn)?;

            Ok(OrderView {
                id: order_id,
                customer: customer.clone(),
                created_at: order.created_at,
                lines: rows
                    .into_iter()
                    .map(|row| OrderLineView {
                        id: row.id,
                        product_id: row.product_id,
                        quantity: row.quantity,
                        unit_price: row.unit_price,
                    })
                    .collect(),
            })
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let customer = customers::table
            .filter(customers::id.eq(order.customer_id))
            .select(CustomerRow::as_select())
            .first(&mut conn)?;

        let lines = order_lines::table
            .filter(order_lines::order_id.eq(order.id))
            .select(OrderLineRow::as_select())
            .load(&mut conn)?;

        Ok(Some(OrderView {
            id: order.id,
            customer: Customer {
                id: customer.id,
                name: customer.name,
                email: customer.email,
            },
            created_at: order.created_at,
            lines: lines
                .into_iter()
                .map(|line| OrderLineView {
                    id: line.id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::DieselOrderRepository;
    use crate::db::DbPool;
    use crate::domain::model::{Customer, NewOrderLine, Product};
    use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
    use crate::infrastructure::customer_repo::DieselCustomerRepository;
    use crate::infrastructure::product_repo::DieselProductRepository;
    use crate::infrastructure::testing::setup_db;

    fn seed(pool: &DbPool) -> (Customer, Product) {
        let customer = DieselCustomerRepository::new(pool.clone())
            .create("Carol", "carol@example.com")
            .expect("seed customer");
        let product = DieselProductRepository::new(pool.clone())
            .create(
                "Notebook",
                BigDecimal::from_str("5.00").expect("valid decimal"),
                10,
            )
            .expect("seed product");
        (customer, product)
    }

    #[tokio::test]
    async fn create_and_find_by_id_roundtrip() {
        let (_container, pool) = setup_db().await;
        let repo = DieselOrderRepository::new(pool.clone());
        let (customer, product) = seed(&pool);

        let created = repo
            .create(
                &customer,
                vec![NewOrderLine {
                    product_id: product.id,
                    quantity: 3,
                    unit_price: product.price.clone(),
                }],
            )
            .expect("create failed");

        let order = repo
            .find_by_id(created.id)
            .expect("find failed")
            .expect("order should exist");

        assert_eq!(order.id, created.id);
        assert_eq!(order.customer, customer);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].product_id, product.id);
        assert_eq!(order.lines[0].quantity, 3);
        assert_eq!(order.lines[0].unit_price, product.price);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselOrderRepository::new(pool);

        let result = repo
            .find_by_id(Uuid::new_v4())
            .expect("find should not error");

        assert!(result.is_none());
    }
}
