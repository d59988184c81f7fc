use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::catalog::Product;
use crate::domain::order::{CheckoutLine, CheckoutOrder, CustomerProfile, OrderView};
use crate::errors::AppError;
use crate::{Catalog, Checkout};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EndpointParams {
    /// Endpoint selector: products, product, orders, order, checkout,
    /// update_stock.
    pub endpoint: Option<String>,
    /// Record id, required by the product and order endpoints.
    pub id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    /// Integer price in the smallest currency unit.
    pub price: i64,
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub stock: i32,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
            image: p.image,
            rating: p.rating,
            stock: p.stock,
            created_at: p.created_at.and_utc().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_amount: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: String,
    /// Line summary ("Radiator x1, Air Filter x2"), only on the single-order
    /// endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
}

impl OrderResponse {
    fn from_view(view: OrderView, items: Option<String>) -> Self {
        OrderResponse {
            id: view.id,
            customer_name: view.customer_name,
            email: view.email,
            phone: view.phone,
            address: view.address,
            total_amount: view.total_amount,
            payment_method: view.payment_method,
            status: view.status,
            created_at: view.created_at.and_utc().to_rfc3339(),
            items,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CheckoutItemRequest {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "customer_name must not be empty"))]
    pub customer_name: String,
    #[validate(email(message = "email is not well-formed"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    pub total_amount: i64,
    #[validate(length(min = 1, message = "payment_method must not be empty"))]
    pub payment_method: String,
    #[validate(length(min = 1, message = "items must not be empty"))]
    pub items: Vec<CheckoutItemRequest>,
}

impl From<CheckoutRequest> for CheckoutOrder {
    fn from(req: CheckoutRequest) -> Self {
        CheckoutOrder {
            customer: CustomerProfile {
                name: req.customer_name,
                email: req.email,
                phone: req.phone,
                address: req.address,
            },
            payment_method: req.payment_method,
            total_amount: req.total_amount,
            lines: req
                .items
                .into_iter()
                .map(|item| CheckoutLine {
                    product_id: item.id,
                    name: item.name,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub success: bool,
    pub order_id: i32,
    pub transaction_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStockRequest {
    pub id: i32,
    pub stock: i32,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /?endpoint=…
///
/// Read endpoints, keyed on the `endpoint` query parameter:
/// `products` lists everything in stock, `product` fetches one by id,
/// `orders` lists orders newest first, `order` fetches one with its line
/// summary.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Requested records as JSON"),
        (status = 400, description = "Missing id parameter"),
        (status = 404, description = "Unknown endpoint or id"),
    ),
    tag = "storefront"
)]
pub async fn storefront_get(
    catalog: web::Data<Catalog>,
    checkout: web::Data<Checkout>,
    query: web::Query<EndpointParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();

    match params.endpoint.as_deref() {
        Some("products") => {
            let products = web::block(move || catalog.list_available())
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;
            let body: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            Ok(HttpResponse::Ok().json(body))
        }
        Some("product") => {
            let id = require_id(params.id)?;
            let product = web::block(move || catalog.get_product(id))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;
            match product {
                Some(p) => Ok(HttpResponse::Ok().json(ProductResponse::from(p))),
                None => Err(AppError::NotFound),
            }
        }
        Some("orders") => {
            let orders = web::block(move || checkout.list_orders())
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;
            let body: Vec<OrderResponse> = orders
                .into_iter()
                .map(|o| OrderResponse::from_view(o, None))
                .collect();
            Ok(HttpResponse::Ok().json(body))
        }
        Some("order") => {
            let id = require_id(params.id)?;
            let detail = web::block(move || checkout.get_order(id))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;
            match detail {
                Some(d) => {
                    Ok(HttpResponse::Ok().json(OrderResponse::from_view(d.order, Some(d.items))))
                }
                None => Err(AppError::NotFound),
            }
        }
        _ => Err(AppError::NotFound),
    }
}

/// POST /?endpoint=…
///
/// Write endpoints: `checkout` places an order as one atomic unit,
/// `update_stock` overwrites a product's stock level.
#[utoipa::path(
    post,
    path = "/",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Checkout receipt or update confirmation", body = CheckoutResponse),
        (status = 400, description = "Malformed body or failed validation"),
        (status = 404, description = "Unknown endpoint or id"),
        (status = 409, description = "Requested quantity exceeds stock"),
        (status = 500, description = "Checkout transaction failed"),
    ),
    tag = "storefront"
)]
pub async fn storefront_post(
    catalog: web::Data<Catalog>,
    checkout: web::Data<Checkout>,
    query: web::Query<EndpointParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    match query.endpoint.as_deref() {
        Some("checkout") => {
            let req: CheckoutRequest = parse_body(&body)?;
            req.validate()
                .map_err(|e| AppError::Validation(e.to_string()))?;

            let receipt = web::block(move || checkout.checkout(req.into()))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;

            Ok(HttpResponse::Ok().json(CheckoutResponse {
                success: true,
                order_id: receipt.order_id,
                transaction_id: receipt.transaction_id,
                message: "order processed".to_string(),
            }))
        }
        Some("update_stock") => {
            let req: UpdateStockRequest = parse_body(&body)?;
            web::block(move || catalog.set_stock(req.id, req.stock))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;

            Ok(HttpResponse::Ok().json(json!({ "success": true })))
        }
        _ => Err(AppError::NotFound),
    }
}

/// Catch-all for verbs other than GET and POST.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({
        "success": false,
        "error": "method not allowed"
    }))
}

fn require_id(id: Option<i32>) -> Result<i32, AppError> {
    id.ok_or_else(|| AppError::Validation("missing id parameter".to_string()))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &web::Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("malformed request body: {}", e)))
}
