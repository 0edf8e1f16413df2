use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    assign::DEFAULT_MAX_TOKEN_LENGTH, registry::IngestRules, third_party::ThirdPartyFilter,
    third_party::ThirdPartyPatterns,
};

pub const CONFIG_FILE_NAME: &str = ".idshrinkrc.json";

/// Upper bound for `maxTokenLength`; 52^8 already exceeds any real project.
pub const MAX_TOKEN_LENGTH_LIMIT: usize = 8;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_markup_extensions")]
    pub markup_extensions: Vec<String>,
    #[serde(default = "default_stylesheet_extensions")]
    pub stylesheet_extensions: Vec<String>,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
    #[serde(default = "default_script_usages")]
    pub script_usages: bool,
    #[serde(default)]
    pub third_party: ThirdPartyPatterns,
}

fn default_markup_extensions() -> Vec<String> {
    ["html", "do"].map(String::from).to_vec()
}

fn default_stylesheet_extensions() -> Vec<String> {
    vec!["css".to_string()]
}

fn default_script_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_min_name_length() -> usize {
    3
}

fn default_max_token_length() -> usize {
    DEFAULT_MAX_TOKEN_LENGTH
}

fn default_script_usages() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            markup_extensions: default_markup_extensions(),
            stylesheet_extensions: default_stylesheet_extensions(),
            script_extensions: default_script_extensions(),
            min_name_length: default_min_name_length(),
            max_token_length: default_max_token_length(),
            script_usages: default_script_usages(),
            third_party: ThirdPartyPatterns::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob in `ignores` or any `thirdParty` regex is
    /// invalid, or if a length bound is out of range.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        ThirdPartyFilter::new(&self.third_party).context("Invalid pattern in 'thirdParty'")?;

        if self.min_name_length == 0 {
            bail!("'minNameLength' must be at least 1");
        }
        if !(1..=MAX_TOKEN_LENGTH_LIMIT).contains(&self.max_token_length) {
            bail!(
                "'maxTokenLength' must be between 1 and {}, got {}",
                MAX_TOKEN_LENGTH_LIMIT,
                self.max_token_length
            );
        }

        Ok(())
    }

    /// Build the ingestion filters for a scan.
    pub fn ingest_rules(&self) -> Result<IngestRules> {
        let third_party =
            ThirdPartyFilter::new(&self.third_party).context("Invalid pattern in 'thirdParty'")?;
        Ok(IngestRules {
            third_party,
            min_name_length: self.min_name_length,
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
