//! Supporting utilities used by models.
//!
//! Code lands here once it is useful beyond a single model's internal
//! `core` module. These modules are public because they're useful, but
//! their APIs may change as the crate evolves.

pub mod constraint;
