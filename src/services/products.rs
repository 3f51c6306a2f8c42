//! Business logic behind the `/products` endpoints.
//!
//! Every function validates its input, talks to the repository and converts
//! repository failures into [`ServiceError::Internal`] after logging them, so
//! the HTTP routes stay thin wrappers that only pick a status code.

use crate::domain::product::Product;
use crate::domain::types::{ImageUrl, ProductId};
use crate::forms::products::{
    PatchProductForm, PatchProductFormPayload, ProductForm, ProductFormPayload,
};
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Ids that cannot exist in the table are reported as missing products.
fn parse_product_id(product_id: i32) -> ServiceResult<ProductId> {
    ProductId::new(product_id).map_err(|_| ServiceError::NotFound)
}

fn find_product<R>(product_id: ProductId, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Return all products ordered by id.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    repo.list_products().map_err(|e| {
        log::error!("Failed to list products: {e}");
        ServiceError::Internal
    })
}

/// Return a single product.
pub fn get_product<R>(product_id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let product_id = parse_product_id(product_id)?;
    find_product(product_id, repo)
}

/// Validate `form` and store it as a new product.
///
/// Products sent without an image get `default_image`.
pub fn create_product<R>(form: ProductForm, default_image: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let payload: ProductFormPayload = form.try_into()?;

    let default_image = ImageUrl::new(default_image).map_err(|e| {
        log::error!("Configured default image is unusable: {e}");
        ServiceError::Internal
    })?;

    let new_product = payload.into_new_product(default_image);
    match repo.create_product(&new_product) {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            Ok(product)
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite name, price and (when sent) image of an existing product.
pub fn replace_product<R>(product_id: i32, form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let product_id = parse_product_id(product_id)?;
    find_product(product_id, repo)?;

    let payload: ProductFormPayload = form.try_into()?;

    match repo.update_product(product_id, &payload.into_replacement()) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to replace product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Change only the fields present in `form`.
///
/// An empty patch returns the product untouched, `updated_at` included.
pub fn patch_product<R>(product_id: i32, form: PatchProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let product_id = parse_product_id(product_id)?;
    let existing = find_product(product_id, repo)?;

    let payload: PatchProductFormPayload = form.try_into()?;
    let update = payload.into_update();
    if update.is_empty() {
        return Ok(existing);
    }

    match repo.update_product(product_id, &update) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Remove a product and return its last state.
pub fn delete_product<R>(product_id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.delete_product(product_id) {
        Ok(Some(product)) => {
            log::info!("Deleted product {product_id}");
            Ok(product)
        }
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Remove every product and return how many were deleted.
pub fn delete_all_products<R>(repo: &R) -> ServiceResult<usize>
where
    R: ProductWriter,
{
    match repo.delete_all_products() {
        Ok(count) => {
            log::info!("Deleted all {count} products");
            Ok(count)
        }
        Err(e) => {
            log::error!("Failed to delete products: {e}");
            Err(ServiceError::Internal)
        }
    }
}
