use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ImageUrl, ProductId, ProductName, ProductPrice};

/// A catalog entry as stored in the `products` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub image: ImageUrl,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
///
/// The identifier is assigned by the repository.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub image: ImageUrl,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changes applied to an existing [`Product`].
///
/// `None` fields keep their stored value; `updated_at` is always written.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProductUpdate {
    pub name: Option<ProductName>,
    pub price: Option<ProductPrice>,
    pub image: Option<ImageUrl>,
    pub updated_at: NaiveDateTime,
}

impl ProductUpdate {
    /// Whether the update carries no field changes besides the timestamp.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.image.is_none()
    }
}
