//! Job file configuration
//!
//! A job file describes one page-removal batch and/or one manifest run:
//!
//! ```toml
//! [remove_pages]
//! input = "p1.pdf"
//!
//! [[remove_pages.outputs]]
//! path = "p1_done.pdf"
//! range = [1, 24]
//!
//! [manifest]
//! directory = "public/exercises"
//! output = "public/exerciseList.json"
//! ```
//!
//! Relative paths in a file loaded with [`Config::from_file`] resolve
//! against the directory containing that file.

use anyhow::Context;
use pagefilter_core::{ExclusionRange, RangePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest directory relative to the project root
pub const DEFAULT_EXERCISES_DIR: &str = "public/exercises";
/// Manifest file relative to the project root
pub const DEFAULT_MANIFEST_FILE: &str = "public/exerciseList.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub remove_pages: Option<RemovePagesConfig>,
    #[serde(default)]
    pub manifest: Option<ManifestConfig>,
}

/// One source document split into any number of outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemovePagesConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub policy: RangePolicy,
    pub outputs: Vec<OutputSpec>,
}

/// Output path and the range excluded from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub range: ExclusionRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    pub directory: PathBuf,
    pub output: PathBuf,
}

impl ManifestConfig {
    /// `<root>/public/exercises` into `<root>/public/exerciseList.json`
    pub fn from_project_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            directory: root.join(DEFAULT_EXERCISES_DIR),
            output: root.join(DEFAULT_MANIFEST_FILE),
        }
    }
}

impl Config {
    /// Load a job file; relative paths resolve against its directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Parse a job file from a TOML string, paths left as written
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// The batch the original exercise scripts ran with hardcoded paths
    pub fn scripted_defaults() -> Self {
        Self {
            remove_pages: Some(RemovePagesConfig {
                input: PathBuf::from("p1.pdf"),
                policy: RangePolicy::Clamp,
                outputs: vec![
                    OutputSpec {
                        path: PathBuf::from("p1_done.pdf"),
                        range: ExclusionRange::new(1, 24),
                    },
                    OutputSpec {
                        path: PathBuf::from("p2.pdf"),
                        range: ExclusionRange::new(25, 39),
                    },
                ],
            }),
            manifest: Some(ManifestConfig {
                directory: PathBuf::from(DEFAULT_EXERCISES_DIR),
                output: PathBuf::from(DEFAULT_MANIFEST_FILE),
            }),
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        if let Some(job) = self.remove_pages.as_mut() {
            resolve(&mut job.input);
            for output in job.outputs.iter_mut() {
                resolve(&mut output.path);
            }
        }
        if let Some(manifest) = self.manifest.as_mut() {
            resolve(&mut manifest.directory);
            resolve(&mut manifest.output);
        }
    }
}
