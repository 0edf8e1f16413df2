use serde::{Deserialize, Serialize};

/// A single raw match produced by an extractor.
///
/// `name` is the captured bare identifier, `literal` the full matched span
/// it was found in (e.g. `name = "header"`, `literal = "id=\"header\""`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub name: String,
    pub literal: String,
}

impl RawMatch {
    pub fn new(name: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            literal: literal.into(),
        }
    }
}

/// Registry record for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierEntry {
    /// Bare identifier text, never empty.
    pub name: String,
    /// Distinct literal spans the name was found in, in discovery order.
    #[serde(default)]
    pub occurrences: Vec<String>,
    /// Total number of matches across the project.
    #[serde(default)]
    pub count: usize,
    /// Replacement token, empty until assigned.
    #[serde(default)]
    pub substitute: String,
    /// `occurrences` with `name` replaced by `substitute`, empty until assigned.
    #[serde(default)]
    pub rewritten_occurrences: Vec<String>,
}

impl IdentifierEntry {
    pub fn new(raw: RawMatch) -> Self {
        Self {
            name: raw.name,
            occurrences: vec![raw.literal],
            count: 1,
            substitute: String::new(),
            rewritten_occurrences: Vec::new(),
        }
    }

    /// Count one more match, keeping `literal` only if it is new.
    pub fn record(&mut self, literal: String) {
        self.count += 1;
        if !self.occurrences.contains(&literal) {
            self.occurrences.push(literal);
        }
    }

    /// Name length in characters.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    /// Total footprint of this identifier: `length(name) * count`.
    pub fn weight(&self) -> usize {
        self.name_len() * self.count
    }

    pub fn is_assigned(&self) -> bool {
        !self.substitute.is_empty()
    }
}
