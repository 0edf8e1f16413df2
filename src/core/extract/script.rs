use std::{collections::HashSet, ops::Range};

use crate::core::catalog::PatternCatalog;

use super::{Extractor, FileHarvest};

/// Extracts identifiers from standalone scripts.
///
/// Selector strings (`"#menu"`, `'.card'`) and usage sites are references: they
/// only count toward names some other file (or an earlier declaration) already
/// defined. Variable and function declarations are definitions.
#[derive(Debug, Clone, Copy)]
pub struct ScriptExtractor {
    /// Count variable usages and function calls against known declarations.
    pub track_usages: bool,
}

impl Default for ScriptExtractor {
    fn default() -> Self {
        Self { track_usages: true }
    }
}

impl Extractor for ScriptExtractor {
    fn extract(&self, text: &str, catalog: &PatternCatalog) -> FileHarvest {
        let mut harvest = FileHarvest::default();

        harvest.extend_rules(&catalog.script_selectors, text);

        // Name spans already taken by declarations; a usage rule must not count
        // the declaration itself a second time.
        let mut declared: HashSet<Range<usize>> = HashSet::new();
        for rule in &catalog.script_declarations {
            for m in rule.find_all(text) {
                declared.insert(m.name_span.clone());
                harvest.push(rule.role, &m);
            }
        }

        if self.track_usages {
            for rule in &catalog.script_usages {
                for m in rule.find_all(text) {
                    if !declared.contains(&m.name_span) {
                        harvest.push(rule.role, &m);
                    }
                }
            }
        }

        harvest
    }
}
