//! Error conversion glue between the form and service layers.
//!
//! Forms must not depend on service error types, so the `From` impls that let
//! services use `?` on form conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::products::{PatchProductFormError, ProductFormError};
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(vec![val.to_string()])
    }
}

impl From<ProductFormError> for ServiceError {
    fn from(val: ProductFormError) -> Self {
        ServiceError::Validation(val.messages())
    }
}

impl From<PatchProductFormError> for ServiceError {
    fn from(val: PatchProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
