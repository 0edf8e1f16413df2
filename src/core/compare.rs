//! Snapshot comparison.
//!
//! Compares two registries category by category. Names present on both sides are
//! reported only when their occurrences or counts differ; names present on one
//! side are always reported, with the other side's text fields set to `None`
//! (serialized as `null`) and its count set to zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{
    data::{Category, IdentifierEntry},
    registry::{Entries, Registry},
};

/// One changed, added or removed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivergenceRecord {
    pub name: String,
    pub occurrences_left: Option<Vec<String>>,
    pub occurrences_right: Option<Vec<String>>,
    pub count_left: usize,
    pub count_right: usize,
    pub substitute_left: Option<String>,
    pub substitute_right: Option<String>,
    pub rewritten_occurrences_left: Option<Vec<String>>,
    pub rewritten_occurrences_right: Option<Vec<String>>,
}

/// Which sides of the comparison hold a record's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Both,
    LeftOnly,
    RightOnly,
}

impl DivergenceRecord {
    fn new(name: &str, left: Option<&IdentifierEntry>, right: Option<&IdentifierEntry>) -> Self {
        Self {
            name: name.to_string(),
            occurrences_left: left.map(|e| e.occurrences.clone()),
            occurrences_right: right.map(|e| e.occurrences.clone()),
            count_left: left.map_or(0, |e| e.count),
            count_right: right.map_or(0, |e| e.count),
            substitute_left: left.map(|e| e.substitute.clone()),
            substitute_right: right.map(|e| e.substitute.clone()),
            rewritten_occurrences_left: left.map(|e| e.rewritten_occurrences.clone()),
            rewritten_occurrences_right: right.map(|e| e.rewritten_occurrences.clone()),
        }
    }

    pub fn presence(&self) -> Presence {
        match (&self.occurrences_left, &self.occurrences_right) {
            (Some(_), None) => Presence::LeftOnly,
            (None, Some(_)) => Presence::RightOnly,
            _ => Presence::Both,
        }
    }
}

/// Per-category divergence lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDiff {
    #[serde(default)]
    pub ids: Vec<DivergenceRecord>,
    #[serde(default)]
    pub classes: Vec<DivergenceRecord>,
    #[serde(default)]
    pub variables: Vec<DivergenceRecord>,
    #[serde(default)]
    pub functions: Vec<DivergenceRecord>,
}

impl SnapshotDiff {
    pub fn records(&self, category: Category) -> &[DivergenceRecord] {
        match category {
            Category::Ids => &self.ids,
            Category::Classes => &self.classes,
            Category::Variables => &self.variables,
            Category::Functions => &self.functions,
        }
    }

    fn records_mut(&mut self, category: Category) -> &mut Vec<DivergenceRecord> {
        match category {
            Category::Ids => &mut self.ids,
            Category::Classes => &mut self.classes,
            Category::Variables => &mut self.variables,
            Category::Functions => &mut self.functions,
        }
    }

    /// Total number of records across categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.records(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn by_name(entries: &Entries) -> HashMap<&str, &IdentifierEntry> {
    entries.iter().map(|e| (e.name.as_str(), e)).collect()
}

fn compare_entries(left: &Entries, right: &Entries) -> Vec<DivergenceRecord> {
    let left_index = by_name(left);
    let right_index = by_name(right);
    let mut records = Vec::new();

    for l in left {
        if let Some(&r) = right_index.get(l.name.as_str()) {
            if l.occurrences != r.occurrences || l.count != r.count {
                records.push(DivergenceRecord::new(&l.name, Some(l), Some(r)));
            }
        }
    }

    for l in left {
        if !right_index.contains_key(l.name.as_str()) {
            records.push(DivergenceRecord::new(&l.name, Some(l), None));
        }
    }

    for r in right {
        if !left_index.contains_key(r.name.as_str()) {
            records.push(DivergenceRecord::new(&r.name, None, Some(r)));
        }
    }

    records
}

/// Structural diff of two snapshots.
///
/// Records are ordered changed, left-only, right-only within a category, each
/// group in the owning snapshot's entry order.
pub fn compare_snapshots(left: &Registry, right: &Registry) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();
    for category in Category::ALL {
        *diff.records_mut(category) =
            compare_entries(left.entries(category), right.entries(category));
    }
    diff
}
