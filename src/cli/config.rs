use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "ENHANCED METRICS ANALYSIS FOR GROK-3 SIMULATIONS";

/// List of simulation files to analyze, one per domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Report heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Domains in report order
    pub domains: Vec<DomainSource>,
}

/// A single domain label and the file holding its simulations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSource {
    /// Label used in the report, e.g. "Retail"
    pub name: String,

    /// Path to the simulation JSON file
    pub path: PathBuf,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl DomainSource {
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            path: path.into(),
        }
    }

    /// Parse a `NAME=PATH` command-line override
    pub fn parse_pair(pair: &str) -> Result<Self> {
        match pair.split_once('=') {
            Some((name, path)) if !name.is_empty() && !path.is_empty() => {
                Ok(Self::new(name, path))
            }
            _ => bail!("Invalid domain '{}', expected NAME=PATH", pair),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::sample()
    }
}

impl AnalysisConfig {
    /// Load configuration from a YAML file.
    ///
    /// Relative domain paths are resolved against the config file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let mut config: AnalysisConfig =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        if config.domains.is_empty() {
            tracing::warn!("Config file {:?} lists no domains", path);
        }

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for domain in &mut config.domains {
            if domain.path.is_relative() {
                domain.path = base.join(&domain.path);
            }
        }

        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Replace the configured domains with explicit overrides
    pub fn with_domains(mut self, domains: Vec<DomainSource>) -> Self {
        self.domains = domains;
        self
    }

    /// The three recorded grok-3 simulation runs
    pub fn sample() -> Self {
        Self {
            title: default_title(),
            domains: vec![
                DomainSource::new(
                    "Retail",
                    "data/simulations/2025-09-25T22:23:36.445085_retail_llm_agent_grok-3_user_simulator_grok-3.json",
                ),
                DomainSource::new(
                    "Airline",
                    "data/simulations/2025-09-25T22:29:52.595166_airline_llm_agent_grok-3_user_simulator_grok-3.json",
                ),
                DomainSource::new(
                    "Telecom",
                    "data/simulations/2025-09-25T22:48:14.059148_telecom_llm_agent_grok-3_user_simulator_grok-3.json",
                ),
            ],
        }
    }
}
