//! Core analysis engine.
//!
//! A scan runs in three steps:
//!
//! 1. **Extraction**: each file is classified by extension and run through the
//!    matching extractor, producing an ordered [`extract::FileHarvest`].
//! 2. **Merge**: harvests are applied to one [`registry::Registry`] in path
//!    order, with third-party and length filters, then the class post-filter.
//! 3. **Assignment** (minify only): ids and classes receive substitute tokens.
//!
//! Snapshots from two scans can be compared with [`compare::compare_snapshots`].

pub mod assign;
pub mod catalog;
pub mod compare;
pub mod context;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod registry;
pub mod third_party;

pub use context::{ScanContext, ScanOutcome};
pub use data::{Category, IdentifierEntry, RawMatch};
pub use registry::Registry;
