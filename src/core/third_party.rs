//! Third-party identifier filtering.
//!
//! Framework identifiers (slick carousels, grid columns, icon fonts, ...) must
//! never be tracked or renamed. Two independent checks use the same configured
//! patterns with different matching semantics:
//!
//! - [`ThirdPartyFilter::is_third_party`]: full match, applied inline while the
//!   registry ingests matches.
//! - [`ThirdPartyFilter::mentions_third_party`]: substring search, applied by the
//!   class post-pass after the whole project is merged. Broader on purpose:
//!   `^col-` only full-matches `col-` but finds `col-md-6`.

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{data::Category, error::PatternError};

/// Raw third-party patterns per category, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyPatterns {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default = "default_class_patterns")]
    pub classes: Vec<String>,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default = "default_function_patterns")]
    pub functions: Vec<String>,
}

fn default_class_patterns() -> Vec<String> {
    [
        r"^slick-.*$",
        r"^slide-.*$",
        r"^React.*$",
        r"^use.*$",
        r"^v-.*$",
        r"^materialize-.*$",
        r"^foundation-.*$",
        r"^swiper-.*$",
        r"^col-",
        r"^(sm|md|lg|xl):.*$",
        r"^lg:",
        r"^fa-.*$",
    ]
    .map(String::from)
    .to_vec()
}

fn default_function_patterns() -> Vec<String> {
    vec![r"^jQuery".to_string()]
}

impl Default for ThirdPartyPatterns {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            classes: default_class_patterns(),
            variables: Vec::new(),
            functions: default_function_patterns(),
        }
    }
}

impl ThirdPartyPatterns {
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Ids => &self.ids,
            Category::Classes => &self.classes,
            Category::Variables => &self.variables,
            Category::Functions => &self.functions,
        }
    }
}

#[derive(Debug, Default)]
struct CompiledPatterns {
    /// Anchored on both ends for full-match checks.
    full: Vec<Regex>,
    /// As written, for substring search.
    search: Vec<Regex>,
}

impl CompiledPatterns {
    fn compile(category: Category, patterns: &[String]) -> Result<Self, PatternError> {
        let mut compiled = Self::default();
        for pattern in patterns {
            let error = |source| PatternError {
                category,
                pattern: pattern.clone(),
                source: Box::new(source),
            };
            compiled
                .full
                .push(Regex::new(&format!("^(?:{pattern})$")).map_err(error)?);
            compiled.search.push(Regex::new(pattern).map_err(error)?);
        }
        Ok(compiled)
    }
}

/// Compiled third-party allow-list, injected into a scan.
#[derive(Debug, Default)]
pub struct ThirdPartyFilter {
    ids: CompiledPatterns,
    classes: CompiledPatterns,
    variables: CompiledPatterns,
    functions: CompiledPatterns,
}

impl ThirdPartyFilter {
    pub fn new(patterns: &ThirdPartyPatterns) -> Result<Self, PatternError> {
        Ok(Self {
            ids: CompiledPatterns::compile(Category::Ids, &patterns.ids)?,
            classes: CompiledPatterns::compile(Category::Classes, &patterns.classes)?,
            variables: CompiledPatterns::compile(Category::Variables, &patterns.variables)?,
            functions: CompiledPatterns::compile(Category::Functions, &patterns.functions)?,
        })
    }

    /// A filter that lets every identifier through.
    pub fn none() -> Self {
        Self::default()
    }

    fn patterns(&self, category: Category) -> &CompiledPatterns {
        match category {
            Category::Ids => &self.ids,
            Category::Classes => &self.classes,
            Category::Variables => &self.variables,
            Category::Functions => &self.functions,
        }
    }

    /// True if `name` fully matches any pattern of `category`.
    pub fn is_third_party(&self, category: Category, name: &str) -> bool {
        self.patterns(category)
            .full
            .iter()
            .any(|re| re.is_match(name).unwrap_or(false))
    }

    /// True if any pattern of `category` matches somewhere inside `name`.
    pub fn mentions_third_party(&self, category: Category, name: &str) -> bool {
        self.patterns(category)
            .search
            .iter()
            .any(|re| re.is_match(name).unwrap_or(false))
    }
}
