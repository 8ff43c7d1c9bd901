//! # Nitrogen Sizing
//!
//! Sizing models for pressure-swing adsorption (PSA) nitrogen generation
//! plants: purity-to-efficiency resolution, air-demand derivation, and
//! air-compressor selection.
//!
//! ## Crate layout
//!
//! - [`models`]: The plant sizing model and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
