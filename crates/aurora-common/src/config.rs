//! Configuration for the Aurora demo.
//!
//! Reads aurora.toml from the current directory or the path in the
//! AURORA_CONFIG env var. Every section has defaults, so an absent file
//! yields the stock demo (ten oncology targets, 0.6 toxicity ceiling, top 5).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{AuroraError, Result};

/// Env var naming an alternative config file.
pub const CONFIG_ENV: &str = "AURORA_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "aurora.toml";

/// Complete demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuroraConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub report: ReportConfig,

    /// Selectable targets, in display order
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            search: SearchConfig::default(),
            report: ReportConfig::default(),
            targets: default_targets(),
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String       { "127.0.0.1".to_string() }
fn default_port() -> u16          { 3001 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

// ── Search ───────────────────────────────────────────────────────────────────

/// Generation and filter defaults for a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of candidates generated before filtering
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Initial toxicity ceiling shown on the slider (0 = low, 1 = high)
    #[serde(default = "default_max_toxicity")]
    pub default_max_toxicity: f64,

    /// Initial shortlist length
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    #[serde(default = "default_min_top_n")]
    pub min_top_n: usize,

    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,

    /// Pixel size of grid icons
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    /// Artificial delay before a run completes
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
}

fn default_pool_size()    -> usize { 10 }
fn default_max_toxicity() -> f64   { 0.6 }
fn default_top_n()        -> usize { 5 }
fn default_min_top_n()    -> usize { 3 }
fn default_max_top_n()    -> usize { 10 }
fn default_icon_size()    -> u32   { 64 }
fn default_latency_ms()   -> u64   { 900 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            default_max_toxicity: default_max_toxicity(),
            default_top_n: default_top_n(),
            min_top_n: default_min_top_n(),
            max_top_n: default_max_top_n(),
            icon_size: default_icon_size(),
            simulated_latency_ms: default_latency_ms(),
        }
    }
}

// ── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_csv_name")]
    pub csv_file_name: String,
    #[serde(default = "default_pdf_name")]
    pub pdf_file_name: String,
}

fn default_title()    -> String { "Aurora BioLab — Candidate Shortlist".to_string() }
fn default_csv_name() -> String { "aurora_candidates.csv".to_string() }
fn default_pdf_name() -> String { "aurora_report.pdf".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            csv_file_name: default_csv_name(),
            pdf_file_name: default_pdf_name(),
        }
    }
}

// ── Targets ──────────────────────────────────────────────────────────────────

/// A selectable protein target and the indication it is shown with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Gene / protein symbol (e.g., "EGFR")
    pub symbol: String,
    /// Disease context (e.g., "non-small cell lung cancer")
    pub indication: String,
}

impl Target {
    pub fn new(symbol: &str, indication: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            indication: indication.to_string(),
        }
    }

    /// Display label, also the input to seed derivation.
    pub fn label(&self) -> String {
        format!("{} ({})", self.symbol, self.indication)
    }
}

fn default_targets() -> Vec<Target> {
    vec![
        Target::new("EGFR", "non-small cell lung cancer"),
        Target::new("KRAS", "pancreatic / lung / colorectal cancers"),
        Target::new("BRAF", "melanoma"),
        Target::new("HER2 / ERBB2", "breast cancer"),
        Target::new("PD-1 / PDCD1", "oncology, immunotherapy"),
        Target::new("PD-L1 / CD274", "oncology, immunotherapy"),
        Target::new("VEGFA", "angiogenesis, oncology"),
        Target::new("ALK", "non-small cell lung cancer"),
        Target::new("BRCA1", "breast / ovarian cancer"),
        Target::new("PARP1", "ovarian cancer"),
    ]
}

/// Databases advertised on the page. Nothing is queried.
pub const DATABASES: [&str; 6] = ["ChEMBL", "BindingDB", "PubChem", "ZINC", "UniProt", "PDB"];

// ── Helper Methods ───────────────────────────────────────────────────────────

impl AuroraConfig {
    /// Load configuration from aurora.toml.
    /// Checks AURORA_CONFIG env var first, then current directory.
    /// Falls back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if !Path::new(&path).exists() {
            warn!("Config file not found: {}, using built-in defaults", path);
            return Ok(Self::default());
        }

        let config = Self::from_toml(&path)?;
        info!("Configuration loaded from {}", path);
        Ok(config)
    }

    /// Load from TOML file
    pub fn from_toml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the search page cannot honour.
    pub fn validate(&self) -> Result<()> {
        let s = &self.search;
        if self.targets.is_empty() {
            return Err(AuroraError::Config("target catalogue is empty".into()));
        }
        if s.pool_size == 0 {
            return Err(AuroraError::Config("search.pool_size must be positive".into()));
        }
        if s.icon_size == 0 {
            return Err(AuroraError::Config("search.icon_size must be positive".into()));
        }
        if s.min_top_n == 0 || s.min_top_n > s.max_top_n {
            return Err(AuroraError::Config(format!(
                "search.min_top_n ({}) must be in 1..=max_top_n ({})",
                s.min_top_n, s.max_top_n
            )));
        }
        if !(s.min_top_n..=s.max_top_n).contains(&s.default_top_n) {
            return Err(AuroraError::Config(format!(
                "search.default_top_n ({}) outside {}..={}",
                s.default_top_n, s.min_top_n, s.max_top_n
            )));
        }
        if !(0.0..=1.0).contains(&s.default_max_toxicity) {
            return Err(AuroraError::Config(format!(
                "search.default_max_toxicity ({}) outside [0, 1]",
                s.default_max_toxicity
            )));
        }
        Ok(())
    }

    /// Look up a target by its display label.
    pub fn find_target(&self, label: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.label() == label)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
