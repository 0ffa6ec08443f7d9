use crate::error::ApiResult;
use crate::response::{CreatedResponse, DataResponse, MessageResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use custbook_core::{Address, AddressId, AddressInput, CustomerId};

pub(super) async fn create(
    State(state): State<AppState>,
    customer_id: Result<Path<CustomerId>, PathRejection>,
    body: Result<Json<AddressInput>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Path(customer_id) = customer_id?;
    let Json(input) = body?;
    let id = state
        .with_address_service(move |service| service.add_address(customer_id, &input))
        .await?;
    Ok(Json(CreatedResponse::new("Address added", id)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    customer_id: Result<Path<CustomerId>, PathRejection>,
) -> ApiResult<Json<DataResponse<Vec<Address>>>> {
    let Path(customer_id) = customer_id?;
    let addresses = state
        .with_address_service(move |service| service.list_addresses(customer_id))
        .await?;
    Ok(Json(DataResponse::new(addresses)))
}

pub(super) async fn update(
    State(state): State<AppState>,
    address_id: Result<Path<AddressId>, PathRejection>,
    body: Result<Json<AddressInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(address_id) = address_id?;
    let Json(input) = body?;
    state
        .with_address_service(move |service| service.update_address(address_id, &input))
        .await?;
    Ok(Json(MessageResponse::new("Address updated")))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    address_id: Result<Path<AddressId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(address_id) = address_id?;
    state
        .with_address_service(move |service| service.delete_address(address_id))
        .await?;
    Ok(Json(MessageResponse::new("Address deleted")))
}
