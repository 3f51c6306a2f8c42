use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Body of 404/500 responses and of 400 responses to partial updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of 400 responses to creation and replacement requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteProductResponse {
    pub message: String,
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteAllProductsResponse {
    pub message: String,
    pub count: usize,
}

impl From<Product> for DeleteProductResponse {
    fn from(product: Product) -> Self {
        Self {
            message: format!("Product {} deleted", product.id),
            product,
        }
    }
}

impl From<usize> for DeleteAllProductsResponse {
    fn from(count: usize) -> Self {
        Self {
            message: format!("Deleted {count} products"),
            count,
        }
    }
}
