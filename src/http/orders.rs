use actix_web::web::{self, Data, Json};
use actix_web::{get, post, HttpResponse};
use tracing::{info, instrument};

use super::dto::{CreateOrderRequest, OrderResponse};
use super::error::ApiError;
use super::AppState;
use crate::domain::NewOrder;

#[post("")]
#[instrument(skip(state, body))]
pub async fn create(state: Data<AppState>, body: Json<CreateOrderRequest>) -> Result<HttpResponse, ApiError> {
    let order = state.orders.create_order(NewOrder::from(body.into_inner())).await?;
    info!(order_id = order.id, "Order placed");

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/orders/{}", order.id)))
        .json(OrderResponse::from(order)))
}

#[get("/{id}")]
#[instrument(skip(state, path), fields(order_id = *path))]
pub async fn get(state: Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse, ApiError> {
    let order = state.orders.find_order(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

#[get("")]
#[instrument(skip(state))]
pub async fn get_all(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let orders: Vec<OrderResponse> = state
        .orders
        .recent_orders()
        .await?
        .into_iter()
        .map(OrderResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(orders))
}
