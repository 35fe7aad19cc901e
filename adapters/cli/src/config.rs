//! TOML configuration file for the command-line adapter.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use roomgen_core::GenerationParams;
use serde::Deserialize;

/// Settings read from a TOML configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    /// Seed used when none is passed on the command line.
    pub(crate) seed: Option<u64>,
    /// Generation parameters; omitted keys keep their defaults.
    pub(crate) generation: GenerationParams,
}

impl ConfigFile {
    /// Reads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to load config file at {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config toml contents")
    }
}
