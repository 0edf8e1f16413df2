//! Pattern catalog - named extraction rules per source kind.
//!
//! Every rule is a single regex whose first capture group (or first non-empty
//! group, for alternation rules) is the bare identifier and whose whole match is
//! the literal occurrence span. Scanning once yields both together, so names and
//! spans can never drift out of step.
//!
//! Rules that need look-around use `fancy_regex`; region splitting for markup
//! uses plain `regex`.

use std::{ops::Range, sync::LazyLock};

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

use crate::core::data::Category;

// Markup regions
const STYLE_REGION: &str = r"(?s)<style.*?>(.*?)</style>";
const SCRIPT_REGION: &str = r"(?s)<script.*?>(.*?)</script>";
const BODY_REGION: &str = r"(?s)<body.*?>(.*?)</body>";
const CLASS_ATTRIBUTE: &str = r#"class="[^"]+""#;

// Selectors. Hex colours (#fff, #a1b2c3, #a1b2c3d4) are not ids.
const ID_SELECTOR: &str = r"#(?![0-9a-fA-F]{3}(?:[0-9a-fA-F]{1,5})?\b)([a-zA-Z0-9_-]+)";
const STYLE_CLASS_SELECTOR: &str = r"(?<=\s)\.([a-zA-Z0-9_-]+)";
const STYLESHEET_CLASS_SELECTOR: &str = r"\.([\w-]+)(?=[,\s{:])";

// Script declarations
const VARIABLE_DECLARATION: &str = r"\b(?:var|let|const)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)";
const SCRIPT_VARIABLE_DECLARATION: &str = r"\b(?:var|let|const)\s+([a-zA-Z_$][\w$]*)(?=\s*[=;])";
const FUNCTION_DECLARATION: &str = concat!(
    r"\bfunction\s+([a-zA-Z_$][a-zA-Z0-9_$]*)",
    r"|([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*function\b",
    r"|([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\(.*?\)\s*=>",
);

// DOM lookups and ad-hoc selector strings inside scripts
const GET_ELEMENT_BY_ID: &str = r#"\bgetElementById\(["']([a-zA-Z0-9_-]+)["']\)"#;
const GET_ELEMENTS_BY_CLASS_NAME: &str = r#"\bgetElementsByClassName\(["']([a-zA-Z0-9_\s-]+)["']\)"#;
const INLINE_ID: &str = r#"['"\s]#([a-zA-Z_][\w\-]*)"#;
const INLINE_CLASS: &str = r#"['"\s]\.([a-zA-Z0-9_-]+)"#;
const QUOTED_ID_SELECTOR: &str = r#"["']#([\w-]+)"#;

// Document body attributes
const ID_ATTRIBUTE: &str = r#"\bid=["']([a-zA-Z0-9_-]+)["']"#;
const CLASS_FIRST: &str = r#""([a-zA-Z0-9_-]+)"#;
const CLASS_MIDDLE: &str = r"\s([a-zA-Z0-9_-]+)(?=\s)";
const CLASS_LAST: &str = r#"\s([a-zA-Z0-9_-]+)""#;
const EVENT_HANDLER_CALL: &str = r#"\bon\w+="([a-zA-Z_$][a-zA-Z0-9_$]*)\("#;
const JAVASCRIPT_HREF_CALL: &str = r#"href=["']javascript:([a-zA-Z_$][a-zA-Z0-9_$]*)\("#;

// Usage sites inside standalone scripts
const VARIABLE_USAGE: &str =
    r"\b([a-zA-Z_$][\w$]*)\b(?=\s*[+*/%-=;\)\],]|\s*,|\s*\)|\s*\[|\.|\$\{|[,:=}\]])";
const FUNCTION_USAGE: &str = r"\b([a-zA-Z_$][\w$]*)(?=\s*[),]|\()";

/// Selector strings in scripts refer to ids first, then classes.
const SELECTOR_TARGETS: &[Category] = &[Category::Ids, Category::Classes];

static STANDARD: LazyLock<PatternCatalog> = LazyLock::new(PatternCatalog::build);

/// How the identifier is read out of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Group 1 is the identifier.
    Single,
    /// Alternation rule; the identifier is whichever group is non-empty.
    FirstNonEmpty,
    /// Group 1 holds whitespace-separated identifiers sharing one literal.
    WhitespaceList,
}

/// What a match of a rule means to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRole {
    /// May create a new entry in the category.
    Definition(Category),
    /// May only bump an existing entry, trying each category in order.
    Reference(&'static [Category]),
}

/// A single match of an extraction rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    pub name: &'t str,
    pub literal: &'t str,
    /// Byte range of `name` within the scanned text.
    pub name_span: Range<usize>,
}

/// A named extraction rule.
#[derive(Debug)]
pub struct ExtractionRule {
    pub name: &'static str,
    pub role: MatchRole,
    pub mode: CaptureMode,
    regex: FancyRegex,
}

impl ExtractionRule {
    fn new(name: &'static str, role: MatchRole, mode: CaptureMode, pattern: &str) -> Self {
        let regex = FancyRegex::new(pattern)
            .unwrap_or_else(|e| panic!("built-in pattern `{name}` failed to compile: {e}"));
        Self {
            name,
            role,
            mode,
            regex,
        }
    }

    fn definition(name: &'static str, category: Category, pattern: &str) -> Self {
        Self::new(name, MatchRole::Definition(category), CaptureMode::Single, pattern)
    }

    fn reference(name: &'static str, targets: &'static [Category], pattern: &str) -> Self {
        Self::new(name, MatchRole::Reference(targets), CaptureMode::Single, pattern)
    }

    fn with_mode(mut self, mode: CaptureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Scan `text` once, yielding each identifier together with its literal span.
    ///
    /// Matches that hit the backtracking limit are skipped.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<RuleMatch<'t>> {
        let mut matches = Vec::new();

        for caps in self.regex.captures_iter(text).filter_map(Result::ok) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let literal = whole.as_str();

            match self.mode {
                CaptureMode::Single => {
                    if let Some(group) = caps.get(1) {
                        matches.push(RuleMatch {
                            name: group.as_str(),
                            literal,
                            name_span: group.start()..group.end(),
                        });
                    }
                }
                CaptureMode::FirstNonEmpty => {
                    let group = (1..caps.len())
                        .filter_map(|i| caps.get(i))
                        .find(|g| !g.as_str().is_empty());
                    if let Some(group) = group {
                        matches.push(RuleMatch {
                            name: group.as_str(),
                            literal,
                            name_span: group.start()..group.end(),
                        });
                    }
                }
                CaptureMode::WhitespaceList => {
                    if let Some(group) = caps.get(1) {
                        for (word, span) in split_words(group.as_str(), group.start()) {
                            matches.push(RuleMatch {
                                name: word,
                                literal,
                                name_span: span,
                            });
                        }
                    }
                }
            }
        }

        matches
    }
}

fn split_words(text: &str, base: usize) -> Vec<(&str, Range<usize>)> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((&text[s..i], base + s..base + i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((&text[s..], base + s..base + text.len()));
    }

    words
}

/// Immutable set of extraction rules, grouped by source kind and region.
#[derive(Debug)]
pub struct PatternCatalog {
    pub style_region: Regex,
    pub script_region: Regex,
    pub body_region: Regex,
    pub class_attribute: Regex,

    /// Rules applied inside each `<style>` region of a markup file.
    pub markup_style: Vec<ExtractionRule>,
    /// Rules applied inside each `<script>` region of a markup file.
    pub markup_script: Vec<ExtractionRule>,
    /// Attribute rules applied to the `<body>` region of a markup file.
    pub markup_body: Vec<ExtractionRule>,
    /// Rules applied to each `class="..."` attribute inside `<body>`.
    pub class_attribute_names: Vec<ExtractionRule>,

    /// Rules for standalone stylesheets.
    pub stylesheet: Vec<ExtractionRule>,

    /// Selector strings in standalone scripts, resolved against known ids/classes.
    pub script_selectors: Vec<ExtractionRule>,
    /// Declarations in standalone scripts.
    pub script_declarations: Vec<ExtractionRule>,
    /// Usage sites in standalone scripts, resolved against known declarations.
    pub script_usages: Vec<ExtractionRule>,
}

impl PatternCatalog {
    /// The built-in catalog, compiled once.
    pub fn standard() -> &'static PatternCatalog {
        &STANDARD
    }

    fn build() -> Self {
        let region = |pattern: &str| {
            Regex::new(pattern)
                .unwrap_or_else(|e| panic!("built-in region pattern failed to compile: {e}"))
        };

        Self {
            style_region: region(STYLE_REGION),
            script_region: region(SCRIPT_REGION),
            body_region: region(BODY_REGION),
            class_attribute: region(CLASS_ATTRIBUTE),

            markup_style: vec![
                ExtractionRule::definition("style-id-selector", Category::Ids, ID_SELECTOR),
                ExtractionRule::definition(
                    "style-class-selector",
                    Category::Classes,
                    STYLE_CLASS_SELECTOR,
                ),
            ],
            markup_script: vec![
                ExtractionRule::definition(
                    "variable-declaration",
                    Category::Variables,
                    VARIABLE_DECLARATION,
                ),
                ExtractionRule::definition(
                    "function-declaration",
                    Category::Functions,
                    FUNCTION_DECLARATION,
                )
                .with_mode(CaptureMode::FirstNonEmpty),
                ExtractionRule::definition("get-element-by-id", Category::Ids, GET_ELEMENT_BY_ID),
                ExtractionRule::definition(
                    "get-elements-by-class-name",
                    Category::Classes,
                    GET_ELEMENTS_BY_CLASS_NAME,
                )
                .with_mode(CaptureMode::WhitespaceList),
                ExtractionRule::definition("inline-id", Category::Ids, INLINE_ID),
                ExtractionRule::definition("inline-class", Category::Classes, INLINE_CLASS),
            ],
            markup_body: vec![
                ExtractionRule::definition("id-attribute", Category::Ids, ID_ATTRIBUTE),
                ExtractionRule::definition(
                    "event-handler-call",
                    Category::Functions,
                    EVENT_HANDLER_CALL,
                ),
                ExtractionRule::definition(
                    "javascript-href-call",
                    Category::Functions,
                    JAVASCRIPT_HREF_CALL,
                ),
            ],
            class_attribute_names: vec![
                ExtractionRule::definition("class-first", Category::Classes, CLASS_FIRST),
                ExtractionRule::definition("class-middle", Category::Classes, CLASS_MIDDLE),
                ExtractionRule::definition("class-last", Category::Classes, CLASS_LAST),
            ],

            stylesheet: vec![
                ExtractionRule::definition("id-selector", Category::Ids, ID_SELECTOR),
                ExtractionRule::definition(
                    "class-selector",
                    Category::Classes,
                    STYLESHEET_CLASS_SELECTOR,
                ),
            ],

            script_selectors: vec![
                ExtractionRule::reference("quoted-id-selector", SELECTOR_TARGETS, QUOTED_ID_SELECTOR),
                ExtractionRule::reference("inline-class-selector", SELECTOR_TARGETS, INLINE_CLASS),
            ],
            script_declarations: vec![
                ExtractionRule::definition(
                    "variable-declaration",
                    Category::Variables,
                    SCRIPT_VARIABLE_DECLARATION,
                ),
                ExtractionRule::definition(
                    "function-declaration",
                    Category::Functions,
                    FUNCTION_DECLARATION,
                )
                .with_mode(CaptureMode::FirstNonEmpty),
            ],
            script_usages: vec![
                ExtractionRule::reference("variable-usage", &[Category::Variables], VARIABLE_USAGE),
                ExtractionRule::reference("function-usage", &[Category::Functions], FUNCTION_USAGE),
            ],
        }
    }
}
