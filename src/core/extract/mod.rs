//! Per-file identifier extraction.
//!
//! Each source kind has its own extractor; all of them are pure functions of the
//! file text and the [`PatternCatalog`]. The output is a [`FileHarvest`]: the
//! ordered list of definition and reference matches, ready to be applied to a
//! [`Registry`](crate::core::registry::Registry).
//!
//! ## Module Structure
//!
//! - `markup`: `<style>`, `<script>` and `<body>` regions of HTML documents
//! - `stylesheet`: standalone CSS
//! - `script`: standalone JavaScript, including cross-references

mod markup;
mod script;
mod stylesheet;


use std::path::Path;

use enum_dispatch::enum_dispatch;

pub use markup::MarkupExtractor;
pub use script::ScriptExtractor;
pub use stylesheet::StylesheetExtractor;

use crate::{
    config::Config,
    core::{
        catalog::{ExtractionRule, MatchRole, PatternCatalog, RuleMatch},
        data::{Category, RawMatch},
        error::ScanError,
    },
};

/// Source kind of a project file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    Markup,
    Stylesheet,
    Script,
}

impl SourceKind {
    /// Classify `path` using the extension lists from `config`.
    pub fn classify(path: &Path, config: &Config) -> Result<SourceKind, ScanError> {
        let unsupported = || ScanError::UnsupportedFileKind {
            path: path.to_path_buf(),
        };
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(unsupported)?;
        let has = |list: &[String]| list.iter().any(|e| e.eq_ignore_ascii_case(ext));

        if has(&config.markup_extensions) {
            Ok(SourceKind::Markup)
        } else if has(&config.stylesheet_extensions) {
            Ok(SourceKind::Stylesheet)
        } else if has(&config.script_extensions) {
            Ok(SourceKind::Script)
        } else {
            Err(unsupported())
        }
    }
}

/// One match ready for the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestItem {
    /// May create an entry in the category.
    Definition(Category, RawMatch),
    /// Bumps the first of the listed categories that already knows the name.
    Reference(&'static [Category], RawMatch),
}

/// Ordered matches extracted from a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHarvest {
    pub items: Vec<HarvestItem>,
}

impl FileHarvest {
    pub fn push(&mut self, role: MatchRole, m: &RuleMatch<'_>) {
        let raw = RawMatch::new(m.name, m.literal);
        self.items.push(match role {
            MatchRole::Definition(category) => HarvestItem::Definition(category, raw),
            MatchRole::Reference(targets) => HarvestItem::Reference(targets, raw),
        });
    }

    /// Run every rule over `text` in order and record the matches.
    pub fn extend_rules(&mut self, rules: &[ExtractionRule], text: &str) {
        for rule in rules {
            for m in rule.find_all(text) {
                self.push(rule.role, &m);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Definitions of `category`, in order.
    pub fn definitions(&self, category: Category) -> impl Iterator<Item = &RawMatch> {
        self.items.iter().filter_map(move |item| match item {
            HarvestItem::Definition(c, raw) if *c == category => Some(raw),
            _ => None,
        })
    }

    /// All references, in order.
    pub fn references(&self) -> impl Iterator<Item = &RawMatch> {
        self.items.iter().filter_map(|item| match item {
            HarvestItem::Reference(_, raw) => Some(raw),
            HarvestItem::Definition(..) => None,
        })
    }
}

/// Extraction over one source kind.
#[enum_dispatch]
pub trait Extractor {
    fn extract(&self, text: &str, catalog: &PatternCatalog) -> FileHarvest;
}

/// Extractor selected for a [`SourceKind`].
#[enum_dispatch(Extractor)]
#[derive(Debug, Clone, Copy)]
pub enum SourceExtractor {
    Markup(MarkupExtractor),
    Stylesheet(StylesheetExtractor),
    Script(ScriptExtractor),
}

impl SourceExtractor {
    pub fn for_kind(kind: SourceKind, config: &Config) -> Self {
        match kind {
            SourceKind::Markup => MarkupExtractor.into(),
            SourceKind::Stylesheet => StylesheetExtractor.into(),
            SourceKind::Script => ScriptExtractor {
                track_usages: config.script_usages,
            }
            .into(),
        }
    }
}

/// Classify `path` and extract `content` with the matching extractor.
///
/// Returns [`ScanError::UnsupportedFileKind`] when the extension is unknown.
pub fn harvest_source(path: &Path, content: &str, config: &Config) -> Result<FileHarvest, ScanError> {
    let kind = SourceKind::classify(path, config)?;
    Ok(SourceExtractor::for_kind(kind, config).extract(content, PatternCatalog::standard()))
}
