use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::order_service::OrderService;
use crate::db::DbPool;
use crate::domain::model::{OrderLineRequest, OrderView};
use crate::errors::AppError;
use crate::infrastructure::customer_repo::DieselCustomerRepository;
use crate::infrastructure::order_repo::DieselOrderRepository;
use crate::infrastructure::product_repo::DieselProductRepository;

use super::customers::CustomerResponse;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderProductRequest {
    pub id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub products: Vec<OrderProductRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer: CustomerResponse,
    pub created_at: String,
    pub lines: Vec<OrderLineResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        OrderResponse {
            id: order.id,
            customer: order.customer.into(),
            created_at: order.created_at.to_rfc3339(),
            lines: order
                .lines
                .into_iter()
                .map(|line| OrderLineResponse {
                    id: line.id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price.to_string(),
                })
                .collect(),
        }
    }
}

fn order_service(
    pool: DbPool,
) -> OrderService<DieselCustomerRepository, DieselProductRepository, DieselOrderRepository> {
    OrderService::new(
        DieselCustomerRepository::new(pool.clone()),
        DieselProductRepository::new(pool.clone()),
        DieselOrderRepository::new(pool),
    )
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Validates the request against the customer and product catalogs, persists
/// the order with snapshotted unit prices, and writes back decremented stock.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Unknown customer or product, or insufficient stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    pool: web::Data<DbPool>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let pool = pool.get_ref().clone();

    let order = web::block(move || {
        let lines = body
            .products
            .into_iter()
            .map(|p| OrderLineRequest {
                product_id: p.id,
                quantity: p.quantity,
            })
            .collect();
        order_service(pool).create_order(body.customer_id, lines)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
    .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
///
/// Returns the order together with its customer and lines.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let pool = pool.get_ref().clone();

    let order = web::block(move || order_service(pool).get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
