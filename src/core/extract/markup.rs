use crate::core::catalog::PatternCatalog;

use super::{Extractor, FileHarvest};

/// Extracts identifiers from HTML documents (and configured alias extensions).
///
/// Regions are visited in order: every `<style>` block, every `<script>` block,
/// then the first `<body>`. Everything found here is a definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupExtractor;

impl Extractor for MarkupExtractor {
    fn extract(&self, text: &str, catalog: &PatternCatalog) -> FileHarvest {
        let mut harvest = FileHarvest::default();

        for caps in catalog.style_region.captures_iter(text) {
            if let Some(style) = caps.get(1) {
                harvest.extend_rules(&catalog.markup_style, style.as_str());
            }
        }

        for caps in catalog.script_region.captures_iter(text) {
            if let Some(script) = caps.get(1) {
                harvest.extend_rules(&catalog.markup_script, script.as_str());
            }
        }

        let body = catalog
            .body_region
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        if let Some(body) = body {
            harvest.extend_rules(&catalog.markup_body, body);
            for attribute in catalog.class_attribute.find_iter(body) {
                harvest.extend_rules(&catalog.class_attribute_names, attribute.as_str());
            }
        }

        harvest
    }
}
