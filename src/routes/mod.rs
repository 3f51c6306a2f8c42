use actix_web::http::Method;
use actix_web::{HttpResponse, error, web};

use crate::dto::products::{ErrorResponse, ValidationErrorResponse};
use crate::services::ServiceError;

pub mod products;

pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Translate a service failure into its HTTP response.
///
/// Internal failures are already logged by the service layer and are answered
/// with a generic message.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => {
            HttpResponse::BadRequest().json(ValidationErrorResponse { errors })
        }
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(NOT_FOUND_MESSAGE)),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// JSON extractor settings answering undecodable bodies with a 400.
///
/// Creation and replacement report the failure in an `errors` array like any
/// other broken rule; partial updates use the single `error` field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let message = format!("Invalid JSON body: {err}");
        let response = match *req.method() {
            Method::POST | Method::PUT => HttpResponse::BadRequest().json(ValidationErrorResponse {
                errors: vec![message],
            }),
            _ => HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        };
        error::InternalError::from_response(err, response).into()
    })
}

/// Path extractor settings: ids that are not valid integers name no product.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::NotFound().json(ErrorResponse::new(NOT_FOUND_MESSAGE));
        error::InternalError::from_response(err, response).into()
    })
}

/// Register every catalog route and the extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(products::list_products)
        .service(products::delete_all_products)
        .service(products::create_product)
        .service(products::show_product)
        .service(products::replace_product)
        .service(products::patch_product)
        .service(products::delete_product);
}
