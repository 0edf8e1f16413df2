use crate::core::catalog::PatternCatalog;

use super::{Extractor, FileHarvest};

/// Extracts id and class selectors from standalone stylesheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetExtractor;

impl Extractor for StylesheetExtractor {
    fn extract(&self, text: &str, catalog: &PatternCatalog) -> FileHarvest {
        let mut harvest = FileHarvest::default();
        harvest.extend_rules(&catalog.stylesheet, text);
        harvest
    }
}
