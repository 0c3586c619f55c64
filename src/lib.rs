//! # invoview
//!
//! Read-only viewer for structured invoice-extraction results. Extraction
//! models write loosely-typed JSON invoices — several overlapping,
//! inconsistently-named shapes — into per-model directories; this crate
//! locates them, normalizes them into one canonical optional-field view
//! model, and renders a human-readable report plus the raw JSON. It never
//! writes data back.
//!
//! Normalization never fails: every field is independently optional, and a
//! missing field renders as omitted content, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use invoview::core::{format_currency, normalize};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "type": "invoice",
//!     "amount": 1234.5,
//!     "currency_id": "CZK",
//!     "lines": [{"part_number": "P1", "quantity": 2, "unit_price": 10}],
//! });
//!
//! let invoice = normalize(&raw);
//! assert_eq!(invoice.kind.as_deref(), Some("invoice"));
//! assert_eq!(invoice.line_items.len(), 1);
//!
//! let amounts = invoice.amounts.unwrap();
//! assert_eq!(format_currency(&amounts.total, "CZK"), "1 234,50 Kč");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Normalizer, currency formatter, report renderer, catalog |
//! | `server` | axum HTTP surface and the `invoview` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod catalog;

#[cfg(feature = "core")]
pub mod config;

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod report;

#[cfg(feature = "server")]
pub mod server;

// Re-export the view model at the crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
