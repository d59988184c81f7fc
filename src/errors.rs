use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("insufficient stock for product: {0}")]
    StockShortage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound => AppError::NotFound,
            DomainError::StockShortage { product } => AppError::StockShortage(product),
            DomainError::Transaction(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::StockShortage(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the logs, not on the wire.
        let message = match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": message
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn validation_returns_400() {
        let resp = AppError::Validation("missing id".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn stock_shortage_returns_409() {
        let resp = AppError::StockShortage("Radiator".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn stock_shortage_display_names_the_product() {
        assert_eq!(
            AppError::StockShortage("Radiator".to_string()).to_string(),
            "insufficient stock for product: Radiator"
        );
    }

    #[test]
    fn domain_shortage_maps_to_app_shortage() {
        let app_err: AppError = DomainError::StockShortage {
            product: "Alternator".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::StockShortage(p) if p == "Alternator"));
    }

    #[test]
    fn domain_transaction_maps_to_app_internal() {
        let app_err: AppError = DomainError::Transaction("rollback".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }

    #[test]
    fn domain_validation_maps_to_app_validation() {
        let app_err: AppError = DomainError::Validation("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(_)));
    }
}
