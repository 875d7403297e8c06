use bigdecimal::BigDecimal;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::model::{Product, QuantityUpdate};
use crate::domain::ports::ProductRepository;
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_domain(row: ProductRow) -> Product {
    Product {
        id: row.id,
        name: row.name,
        price: row.price,
        quantity: row.quantity,
    }
}

impl ProductRepository for DieselProductRepository {
    fn create(
        &self,
        name: &str,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        diesel::insert_into(products::table)
            .values(&NewProductRow {
                id,
                name: name.to_string(),
                price: price.clone(),
                quantity,
            })
            .execute(&mut conn)?;

        Ok(Product {
            id,
            name: name.to_string(),
            price,
            quantity,
        })
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .filter(products::name.eq(name))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(to_domain))
    }

    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .filter(products::id.eq_any(ids.to_vec()))
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    fn update_quantity(&self, updates: &[QuantityUpdate]) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            for update in updates {
                diesel::update(products::table.filter(products::id.eq(update.product_id)))
                    .set((
                        products::quantity.eq(update.quantity),
                        products::updated_at.eq(diesel::dsl::now),
                    ))
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}
