use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Ordered usage color bands, checked top-down; the first entry with
    /// `floor(pct) >= min_pct` wins, so the catch-all goes last with
    /// `min_pct = 0`.
    ///
    /// Example in dfc.toml (reduced 3-band table):
    /// ```toml
    /// [[display.bands]]
    /// min_pct = 80
    /// color   = "red"
    ///
    /// [[display.bands]]
    /// min_pct = 50
    /// color   = "yellow"
    ///
    /// [[display.bands]]
    /// min_pct = 0
    /// color   = "green"
    /// ```
    #[serde(default = "UsageBand::defaults")]
    pub bands: Vec<UsageBand>,
}

/// One usage color band: percentages at or above `min_pct` get `color`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageBand {
    pub min_pct: u8,
    pub color: String,
}

impl UsageBand {
    pub fn defaults() -> Vec<Self> {
        [
            (90, "bold-red"),
            (80, "red"),
            (70, "bright-red"),
            (60, "orange"),
            (50, "yellow"),
            (40, "bright-yellow"),
            (30, "cyan-green"),
            (20, "dim-green"),
            (10, "green"),
            (0,  "bright-green"),
        ]
        .into_iter()
        .map(|(min_pct, color)| UsageBand { min_pct, color: color.into() })
        .collect()
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self { display: DisplayConfig::default() }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { bands: UsageBand::defaults() }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match Config::config_path() {
            Some(path) => Config::load_from(&path),
            None       => Config::default(),
        }
    }

    fn load_from(path: &Path) -> Self {
        match try_load(path) {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run only (best-effort); an
                // existing but malformed file is left untouched
                if !path.exists() {
                    let _ = try_write_defaults(path);
                }
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dfc").join("dfc.toml"))
    }
}

fn try_load(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# dfc configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
