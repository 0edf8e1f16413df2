//! idshrink - identifier harvester and minifier for static web projects
//!
//! idshrink scans the markup, stylesheets and scripts of a web project, collects
//! every locally defined element id, CSS class, script variable and script
//! function with its usage count, and assigns the heaviest ids and classes the
//! shortest substitute tokens. Two snapshots can be diffed to see how a
//! project's identifiers changed between versions.
//!
//! The computed mapping is reported, never applied: project files are only
//! read.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, registry, assignment and comparison

pub mod cli;
pub mod config;
pub mod core;
