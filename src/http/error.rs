use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn product_not_found() -> Self {
        ApiError::NotFound("Product not found".to_string())
    }

    pub fn order_not_found() -> Self {
        ApiError::NotFound("Order not found".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::product_not_found(),
            ProductError::InsufficientStock(message) | ProductError::Invalid(message) => {
                ApiError::BadRequest(message)
            }
            ProductError::ActorCommunicationError(e) => {
                error!(error = %e, "Product service unavailable");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::order_not_found(),
            OrderError::ValidationError(message)
            | OrderError::InvalidProduct(message)
            | OrderError::InsufficientStock(message) => ApiError::BadRequest(message),
            OrderError::ProductService(e) => ApiError::from(e),
            OrderError::ActorCommunicationError(e) => {
                error!(error = %e, "Order service unavailable");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::from(OrderError::ValidationError("x".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(OrderError::InsufficientStock("x".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(OrderError::NotFound(3)), StatusCode::NOT_FOUND),
            (ApiError::from(ProductError::NotFound("3".into())), StatusCode::NOT_FOUND),
            (
                ApiError::from(OrderError::ActorCommunicationError(FrameworkError::ActorClosed)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status_code(), status);
        }
    }

    #[test]
    fn test_messages_are_passed_through() {
        let error = ApiError::from(OrderError::InvalidProduct(
            "One or more products were not found or are inactive".into(),
        ));
        assert_eq!(error.to_string(), "One or more products were not found or are inactive");
        assert_eq!(ApiError::from(OrderError::NotFound(12)).to_string(), "Order not found");
    }
}
