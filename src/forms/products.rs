use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, ProductUpdate};
use crate::domain::types::{ImageUrl, ProductName, ProductPrice, TypeConstraintError};

pub const NAME_REQUIRED: &str = "name is required";
pub const PRICE_REQUIRED: &str = "price is required";
pub const PRICE_NOT_POSITIVE: &str = "price must be greater than zero";

/// Flatten validator output into one message per violated rule.
///
/// Fields are reported in alphabetical order so responses are stable.
fn violation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect()
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Blank images are treated as if no image had been sent.
fn non_blank_image(value: Option<String>) -> Result<Option<ImageUrl>, TypeConstraintError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(ImageUrl::new)
        .transpose()
}

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Fields are optional at the JSON level so that a missing field is reported
/// as a violated rule instead of a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "price is required"),
        range(exclusive_min = 0.0, message = "price must be greater than zero")
    )]
    pub price: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub image: Option<ImageUrl>,
}

impl ProductFormPayload {
    /// Build a new product, falling back to `default_image` when none was sent.
    pub fn into_new_product(self, default_image: ImageUrl) -> NewProduct {
        let now = Utc::now().naive_utc();
        NewProduct {
            name: self.name,
            price: self.price,
            image: self.image.unwrap_or(default_image),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a full replacement; an absent image keeps the stored one.
    pub fn into_replacement(self) -> ProductUpdate {
        ProductUpdate {
            name: Some(self.name),
            price: Some(self.price),
            image: self.image,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(violation_messages(&value))
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl ProductFormError {
    /// Messages suitable for the `errors` array of a 400 response.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            Self::TypeConstraint(message) => vec![message.clone()],
        }
    }
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        let value = ProductForm {
            name: trimmed(value.name),
            ..value
        };
        value.validate()?;

        let name = value
            .name
            .ok_or(TypeConstraintError::EmptyString("name"))?;
        let price = value
            .price
            .ok_or(TypeConstraintError::NonPositiveNumber("price"))?;

        Ok(Self {
            name: ProductName::new(name)?,
            price: ProductPrice::new(price)?,
            image: non_blank_image(value.image)?,
        })
    }
}

/// Body of `PATCH /products/{id}`; only the fields present are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchProductForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchProductFormPayload {
    pub name: Option<ProductName>,
    pub price: Option<ProductPrice>,
    pub image: Option<ImageUrl>,
}

impl PatchProductFormPayload {
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            price: self.price,
            image: self.image,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PatchProductFormError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for PatchProductFormError {
    fn from(value: ValidationErrors) -> Self {
        let message = violation_messages(&value)
            .into_iter()
            .next()
            .unwrap_or_else(|| value.to_string());
        Self::Validation(message)
    }
}

impl From<TypeConstraintError> for PatchProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<PatchProductForm> for PatchProductFormPayload {
    type Error = PatchProductFormError;

    fn try_from(value: PatchProductForm) -> Result<Self, Self::Error> {
        let value = PatchProductForm {
            name: trimmed(value.name),
            ..value
        };
        value.validate()?;

        Ok(Self {
            name: value.name.map(ProductName::new).transpose()?,
            price: value.price.map(ProductPrice::new).transpose()?,
            image: non_blank_image(value.image)?,
        })
    }
}
