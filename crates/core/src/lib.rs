//! Domain types, errors, and pure input-cleaning rules shared by the
//! storage and HTTP layers.

pub mod breed;
pub mod error;
pub mod types;
