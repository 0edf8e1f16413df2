use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier category tracked by the registry.
///
/// Serialized as the lower-case plural key used in snapshots
/// (`ids`, `classes`, `variables`, `functions`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ids,
    Classes,
    Variables,
    Functions,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ids,
        Category::Classes,
        Category::Variables,
        Category::Functions,
    ];

    /// Categories that receive substitutes during minification.
    pub const MINIFIED: [Category; 2] = [Category::Ids, Category::Classes];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ids => "ids",
            Category::Classes => "classes",
            Category::Variables => "variables",
            Category::Functions => "functions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
