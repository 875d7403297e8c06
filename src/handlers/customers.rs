use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::customer_service::CustomerService;
use crate::db::DbPool;
use crate::domain::model::Customer;
use crate::errors::AppError;
use crate::infrastructure::customer_repo::DieselCustomerRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            id: c.id,
            name: c.name,
            email: c.email,
        }
    }
}

/// POST /customers
///
/// Registers a new customer. Fails with 400 if the email is already in use.
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created successfully", body = CustomerResponse),
        (status = 400, description = "Email already in use"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let pool = pool.get_ref().clone();

    let customer = web::block(move || {
        let service = CustomerService::new(DieselCustomerRepository::new(pool));
        service.create_customer(&body.name, &body.email)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
    .map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
}
