// SPDX-License-Identifier: MPL-2.0
//! Domain types for the picker: amounts, the denomination catalog, and the
//! bounded note selection. Everything here is pure and rendering-free.

pub mod catalog;
pub mod money;
pub mod selection;

pub use catalog::{Catalog, Denomination, ExponentRange};
pub use money::Millisats;
pub use selection::{Selection, Toggle};
