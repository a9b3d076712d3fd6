//! HTTP surface: catalog, orders and feature-flag introspection.

pub mod dto;
pub mod error;
mod feature_flags;
mod orders;
mod products;

use std::sync::Arc;

use actix_web::web;

use crate::clients::{OrderClient, ProductClient};
use crate::feature_flags::FlagSource;
use crate::pricing::PricingService;
use error::ApiError;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub orders: OrderClient,
    pub pricing: PricingService,
    pub flags: Arc<dyn FlagSource>,
}

/// Registers all routes plus JSON and path extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(format!("Invalid request body: {}", err)).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(format!("Invalid path: {}", err)).into()),
    )
    .service(
        web::scope("/api/products")
            .service(products::get_all)
            .service(products::search)
            .service(products::get),
    )
    .service(
        web::scope("/api/orders")
            .service(orders::create)
            .service(orders::get_all)
            .service(orders::get),
    )
    .service(
        web::scope("/api/featureflags")
            .service(feature_flags::get_all)
            .service(feature_flags::get),
    );
}
