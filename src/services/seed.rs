//! Demo catalog inserted into an empty database on start-up.

use chrono::Utc;

use crate::domain::product::NewProduct;
use crate::domain::types::{ImageUrl, ProductName, ProductPrice};
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

const DEMO_PRODUCTS: [(&str, f64, &str); 10] = [
    (
        "Phone",
        15000.0,
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=400&fit=crop",
    ),
    (
        "Laptop",
        25000.0,
        "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=400&fit=crop",
    ),
    (
        "Headphones",
        2000.0,
        "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
    ),
    (
        "Mouse",
        500.0,
        "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400&h=400&fit=crop",
    ),
    (
        "Keyboard",
        1500.0,
        "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400&h=400&fit=crop",
    ),
    (
        "Bag",
        800.0,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop",
    ),
    (
        "Book",
        300.0,
        "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=400&fit=crop",
    ),
    (
        "Pen",
        50.0,
        "https://images.unsplash.com/photo-1583485088034-697b5bc54ccd?w=400&h=400&fit=crop",
    ),
    (
        "Watch",
        3000.0,
        "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=400&h=400&fit=crop",
    ),
    (
        "Shoes",
        2500.0,
        "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400&h=400&fit=crop",
    ),
];

/// Insert the demo catalog if the store holds no products yet.
///
/// Returns the number of inserted products; `0` when the store was not empty.
pub fn seed_products<R>(repo: &R) -> ServiceResult<usize>
where
    R: ProductReader + ProductWriter,
{
    let existing = repo.count_products().map_err(|e| {
        log::error!("Failed to count products: {e}");
        ServiceError::Internal
    })?;
    if existing > 0 {
        log::info!("Skipping demo catalog, {existing} products already stored");
        return Ok(0);
    }

    let now = Utc::now().naive_utc();
    for (name, price, image) in DEMO_PRODUCTS {
        let product = NewProduct {
            name: ProductName::new(name)?,
            price: ProductPrice::new(price)?,
            image: ImageUrl::new(image)?,
            created_at: now,
            updated_at: now,
        };
        repo.create_product(&product).map_err(|e| {
            log::error!("Failed to seed product '{name}': {e}");
            ServiceError::Internal
        })?;
    }

    log::info!("Seeded {} demo products", DEMO_PRODUCTS.len());
    Ok(DEMO_PRODUCTS.len())
}
