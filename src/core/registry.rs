//! Identifier registry - the single merge point for every extractor.
//!
//! A [`Registry`] holds one [`Entries`] collection per [`Category`]. Harvests are
//! applied with [`Registry::apply_all`]; definitions go through
//! [`Registry::update`] (third-party and length filters, create-or-bump) and
//! references through [`Registry::reference`] (bump only).
//!
//! A registry serializes as `{"ids": [...], "classes": [...], ...}`; categories
//! missing from a snapshot deserialize as empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{
    data::{Category, IdentifierEntry, RawMatch},
    extract::{FileHarvest, HarvestItem},
    third_party::ThirdPartyFilter,
};

/// Filters applied when a definition is ingested.
#[derive(Debug)]
pub struct IngestRules {
    pub third_party: ThirdPartyFilter,
    /// Names shorter than this (in characters) are assumed minimal already.
    pub min_name_length: usize,
}

impl Default for IngestRules {
    fn default() -> Self {
        Self {
            third_party: ThirdPartyFilter::none(),
            min_name_length: 3,
        }
    }
}

/// Outcome of a single [`Registry::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Created,
    Bumped,
    SkippedThirdParty,
    SkippedShort,
}

/// Entries of one category, unique by name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<IdentifierEntry>", into = "Vec<IdentifierEntry>")]
pub struct Entries {
    entries: Vec<IdentifierEntry>,
    index: HashMap<String, usize>,
}

impl From<Vec<IdentifierEntry>> for Entries {
    fn from(list: Vec<IdentifierEntry>) -> Self {
        let mut entries = Entries::default();
        for entry in list {
            if !entries.contains(&entry.name) {
                entries.insert(entry);
            }
        }
        entries
    }
}

impl From<Entries> for Vec<IdentifierEntry> {
    fn from(entries: Entries) -> Self {
        entries.entries
    }
}

impl Entries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&IdentifierEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut IdentifierEntry> {
        self.index.get(name).map(|&i| &mut self.entries[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IdentifierEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[IdentifierEntry] {
        &self.entries
    }

    /// Mutable access for assignment. Callers must not rename entries.
    pub fn as_mut_slice(&mut self) -> &mut [IdentifierEntry] {
        &mut self.entries
    }

    fn insert(&mut self, entry: IdentifierEntry) {
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Keep only entries matching `keep`; returns how many were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&IdentifierEntry) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| keep(e));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        before - self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a IdentifierEntry;
    type IntoIter = std::slice::Iter<'a, IdentifierEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Identifiers harvested from one project scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub ids: Entries,
    #[serde(default)]
    pub classes: Entries,
    #[serde(default)]
    pub variables: Entries,
    #[serde(default)]
    pub functions: Entries,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: Category) -> &Entries {
        match category {
            Category::Ids => &self.ids,
            Category::Classes => &self.classes,
            Category::Variables => &self.variables,
            Category::Functions => &self.functions,
        }
    }

    pub fn entries_mut(&mut self, category: Category) -> &mut Entries {
        match category {
            Category::Ids => &mut self.ids,
            Category::Classes => &mut self.classes,
            Category::Variables => &mut self.variables,
            Category::Functions => &mut self.functions,
        }
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&IdentifierEntry> {
        self.entries(category).get(name)
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.entries(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ingest one definition match.
    pub fn update(&mut self, category: Category, raw: RawMatch, rules: &IngestRules) -> UpdateOutcome {
        if rules.third_party.is_third_party(category, &raw.name) {
            return UpdateOutcome::SkippedThirdParty;
        }
        if raw.name.chars().count() < rules.min_name_length {
            return UpdateOutcome::SkippedShort;
        }

        let entries = self.entries_mut(category);
        match entries.get_mut(&raw.name) {
            Some(entry) => {
                entry.record(raw.literal);
                UpdateOutcome::Bumped
            }
            None => {
                entries.insert(IdentifierEntry::new(raw));
                UpdateOutcome::Created
            }
        }
    }

    /// Count a usage of an already-defined name.
    ///
    /// `targets` are tried in order; the first category that knows the name is
    /// bumped and returned. Unknown names are dropped.
    pub fn reference(&mut self, targets: &[Category], raw: RawMatch) -> Option<Category> {
        for &category in targets {
            if let Some(entry) = self.entries_mut(category).get_mut(&raw.name) {
                entry.record(raw.literal);
                return Some(category);
            }
        }
        None
    }

    /// Apply a single file harvest. See [`Registry::apply_all`].
    pub fn apply(&mut self, harvest: FileHarvest, rules: &IngestRules) {
        self.apply_all([harvest], rules);
    }

    /// Apply the harvests of a whole project, in the given order.
    ///
    /// Every definition is ingested before any reference is resolved, so a
    /// reference is counted no matter which file defines its target.
    pub fn apply_all(
        &mut self,
        harvests: impl IntoIterator<Item = FileHarvest>,
        rules: &IngestRules,
    ) {
        let mut references = Vec::new();
        for harvest in harvests {
            for item in harvest.items {
                match item {
                    HarvestItem::Definition(category, raw) => {
                        self.update(category, raw, rules);
                    }
                    HarvestItem::Reference(targets, raw) => references.push((targets, raw)),
                }
            }
        }

        for (targets, raw) in references {
            self.reference(targets, raw);
        }
    }

    /// Drop class entries whose name contains a third-party class pattern match.
    ///
    /// Runs once after the whole project is merged. Uses substring search, which
    /// is broader than the full match applied during [`Registry::update`].
    pub fn remove_third_party_classes(&mut self, filter: &ThirdPartyFilter) -> usize {
        self.classes
            .retain(|entry| !filter.mentions_third_party(Category::Classes, &entry.name))
    }
}
