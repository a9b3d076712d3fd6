use actix_web::web::{self, Data, Json};
use actix_web::{get, post, HttpResponse};
use tracing::{info, instrument};

use super::dto::{ProductResponse, ProductSearchRequest};
use super::error::ApiError;
use super::AppState;
use crate::catalog::{self, CatalogQuery, PricedProduct};

fn respond(products: Vec<PricedProduct>) -> HttpResponse {
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    HttpResponse::Ok().json(body)
}

#[get("")]
#[instrument(skip(state))]
pub async fn get_all(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let products = state.products.list_products().await?;
    let priced = catalog::query_catalog(products, &CatalogQuery::default(), state.flags.as_ref(), &state.pricing);
    info!(count = priced.len(), "Listing products");
    Ok(respond(priced))
}

#[post("/search")]
#[instrument(skip(state, body))]
pub async fn search(state: Data<AppState>, body: Json<ProductSearchRequest>) -> Result<HttpResponse, ApiError> {
    let query = CatalogQuery::from(body.into_inner());
    let products = state.products.list_products().await?;
    let priced = catalog::query_catalog(products, &query, state.flags.as_ref(), &state.pricing);
    info!(count = priced.len(), "Product search");
    Ok(respond(priced))
}

#[get("/{id}")]
#[instrument(skip(state, path), fields(product_id = *path))]
pub async fn get(state: Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse, ApiError> {
    let product = state
        .products
        .get_product(path.into_inner())
        .await?
        .ok_or_else(ApiError::product_not_found)?;

    if !catalog::is_visible(&product, state.flags.as_ref()) {
        return Err(ApiError::NotFound("Product not available".to_string()));
    }

    let price = state.pricing.unit_price(&product);
    Ok(HttpResponse::Ok().json(ProductResponse::from(PricedProduct { product, price })))
}
