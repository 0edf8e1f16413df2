//! Scan orchestration.
//!
//! `ScanContext` ties the pieces together: configuration lookup, file
//! discovery, parallel per-file extraction and the single-writer merge into a
//! [`Registry`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        assign::assign_replacements,
        catalog::PatternCatalog,
        data::Category,
        error::{AssignError, ScanError},
        extract::{Extractor, FileHarvest, SourceExtractor},
        file_scanner::{ProjectFile, scan_files},
        registry::{IngestRules, Registry},
    },
};

/// Everything one scan produced.
#[derive(Debug)]
pub struct ScanOutcome {
    pub registry: Registry,
    /// Files that were skipped, in path order.
    pub issues: Vec<ScanError>,
    /// Files successfully read and extracted.
    pub files_scanned: usize,
    /// Class entries dropped by the third-party post-filter.
    pub third_party_removed: usize,
}

/// Scan state for one project root.
pub struct ScanContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Files to scan, sorted by path.
    pub files: Vec<ProjectFile>,
    pub verbose: bool,
    rules: IngestRules,
}

impl ScanContext {
    /// Load configuration from `source_root` (or the current directory) and
    /// discover the project files.
    pub fn new(source_root: Option<&Path>, verbose: bool) -> Result<Self> {
        let root_dir = source_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        Self::with_config(root_dir, config_result.config, verbose)
    }

    /// Build a context from an already loaded configuration.
    pub fn with_config(root_dir: PathBuf, config: Config, verbose: bool) -> Result<Self> {
        let rules = config.ingest_rules()?;
        let scan_result = scan_files(&root_dir, &config, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            rules,
        })
    }

    /// Extract every file and merge the results.
    ///
    /// Reading and extraction run in parallel; harvests are merged in path
    /// order, definitions before references, so the result does not depend on
    /// thread scheduling or on how files are named.
    pub fn collect(&self) -> ScanOutcome {
        let results: Vec<Result<FileHarvest, ScanError>> = self
            .files
            .par_iter()
            .map(|file| read_and_harvest(file, &self.config))
            .collect();

        let mut harvests = Vec::with_capacity(results.len());
        let mut issues = Vec::new();

        for result in results {
            match result {
                Ok(harvest) => harvests.push(harvest),
                Err(e) => {
                    if self.verbose {
                        eprintln!("{} {}", "warning:".bold().yellow(), e);
                    }
                    issues.push(e);
                }
            }
        }

        let files_scanned = harvests.len();
        let mut registry = Registry::new();
        registry.apply_all(harvests, &self.rules);

        let third_party_removed = registry.remove_third_party_classes(&self.rules.third_party);

        ScanOutcome {
            registry,
            issues,
            files_scanned,
            third_party_removed,
        }
    }

    /// Collect, then assign substitutes to ids and classes.
    pub fn minify(&self) -> Result<ScanOutcome, AssignError> {
        let mut outcome = self.collect();
        minify_registry(&mut outcome.registry, self.config.max_token_length)?;
        Ok(outcome)
    }
}

/// Assign substitutes for every minified category of `registry`.
pub fn minify_registry(registry: &mut Registry, max_token_length: usize) -> Result<(), AssignError> {
    for category in Category::MINIFIED {
        assign_replacements(category, registry.entries_mut(category), max_token_length)?;
    }
    Ok(())
}

fn read_and_harvest(file: &ProjectFile, config: &Config) -> Result<FileHarvest, ScanError> {
    let path = &file.path;
    let bytes = fs::read(path).map_err(|source| ScanError::ReadFailure {
        path: path.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| ScanError::DecodeFailure {
        path: path.clone(),
        source,
    })?;
    Ok(SourceExtractor::for_kind(file.kind, config).extract(&content, PatternCatalog::standard()))
}
