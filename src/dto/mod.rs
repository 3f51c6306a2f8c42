//! JSON envelopes returned by the HTTP routes.

pub mod products;
