use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::product_service::ProductService;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::infrastructure::product_repo::DieselProductRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub quantity: i32,
}

/// POST /products
///
/// Adds a product to the catalog. Fails with 400 if the name is taken.
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Invalid price or duplicate name"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let pool = pool.get_ref().clone();

    let price = BigDecimal::from_str(&body.price)
        .map_err(|e| AppError::BadRequest(format!("Invalid price '{}': {}", body.price, e)))?;

    let product = web::block(move || {
        let service = ProductService::new(DieselProductRepository::new(pool));
        service.create_product(&body.name, price, body.quantity)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
    .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(ProductResponse {
        id: product.id,
        name: product.name,
        price: product.price.to_string(),
        quantity: product.quantity,
    }))
}
