//! Core data types shared by extraction, registry, assignment and comparison.
//!
//! ## Module Structure
//!
//! - `category`: Category enum (ids, classes, variables, functions)
//! - `entry`: RawMatch and IdentifierEntry

pub mod category;
pub mod entry;

pub use category::Category;
pub use entry::{IdentifierEntry, RawMatch};
