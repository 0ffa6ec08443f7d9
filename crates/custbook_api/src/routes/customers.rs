use crate::error::ApiResult;
use crate::response::{CreatedResponse, DataResponse, MessageResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use custbook_core::{Customer, CustomerId, CustomerInput};

pub(super) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Json(input) = body?;
    let id = state
        .with_customer_service(move |service| service.create_customer(&input))
        .await?;
    Ok(Json(CreatedResponse::new("Customer created", id)))
}

pub(super) async fn list(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = state
        .with_customer_service(|service| service.list_customers())
        .await?;
    Ok(Json(DataResponse::new(customers)))
}

pub(super) async fn get_one(
    State(state): State<AppState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> ApiResult<Json<DataResponse<Option<Customer>>>> {
    let Path(id) = id?;
    let customer = state
        .with_customer_service(move |service| service.get_customer(id))
        .await?;
    Ok(Json(DataResponse::new(customer)))
}

pub(super) async fn update(
    State(state): State<AppState>,
    id: Result<Path<CustomerId>, PathRejection>,
    body: Result<Json<CustomerInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(input) = body?;
    state
        .with_customer_service(move |service| service.update_customer(id, &input))
        .await?;
    Ok(Json(MessageResponse::new("Customer updated")))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state
        .with_customer_service(move |service| service.delete_customer(id))
        .await?;
    Ok(Json(MessageResponse::new("Customer deleted")))
}
