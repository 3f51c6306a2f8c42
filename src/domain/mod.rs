//! Domain entities and value types shared by the repository and service layers.

pub mod product;
pub mod types;
