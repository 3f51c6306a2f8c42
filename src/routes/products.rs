use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::dto::products::{DeleteAllProductsResponse, DeleteProductResponse};
use crate::forms::products::{PatchProductForm, ProductForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products::{
    create_product as create_product_service, delete_all_products as delete_all_products_service,
    delete_product as delete_product_service, get_product as get_product_service,
    list_products as list_products_service, patch_product as patch_product_service,
    replace_product as replace_product_service,
};

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match create_product_service(form, &server_config.default_image, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err),
    }
}

#[put("/products/{product_id}")]
pub async fn replace_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match replace_product_service(product_id.into_inner(), form, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[patch("/products/{product_id}")]
pub async fn patch_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PatchProductForm>,
) -> impl Responder {
    match patch_product_service(product_id.into_inner(), form, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(DeleteProductResponse::from(product)),
        Err(err) => error_response(err),
    }
}

#[delete("/products")]
pub async fn delete_all_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match delete_all_products_service(repo.get_ref()) {
        Ok(count) => HttpResponse::Ok().json(DeleteAllProductsResponse::from(count)),
        Err(err) => error_response(err),
    }
}
