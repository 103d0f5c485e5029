// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! Builds configuration stores from line sources and answers parameter
//! lookups against them.

pub mod lookup;
pub mod store_builder;

pub use lookup::{ParamLookup, ParamReport};
pub use store_builder::{ParseReport, StoreBuilder};
