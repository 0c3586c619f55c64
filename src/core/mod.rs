//! Normalization core: the schema-tolerant mapper and currency formatting.
//!
//! This module turns the heterogeneous raw JSON emitted by extraction
//! models into one canonical, fully-optional view model. Both entry points
//! are total functions: they cannot fail on any parsed input.

mod currency;
mod normalize;
mod types;

pub use currency::format_currency;
pub use normalize::{normalize, unwrap_document};
pub use types::*;
