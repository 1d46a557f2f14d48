use crate::error::ConfigError;
use palette_remap::{IndexPolicy, RemapOptions, ScanOrder};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "PALETTIZER_CONFIG";

/// Run settings loaded from a YAML file.
///
/// Every field is optional; a missing file section falls back to the default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Pixel scan order used for palette extraction and remapping
    pub scan_order: ScanOrderSetting,

    /// What to do with a scaled index past the end of the target palette
    pub index_policy: IndexPolicySetting,

    /// PNG compression level for the output file
    pub compression: CompressionSetting,

    /// Re-compress the output with oxipng
    pub optimize: bool,

    /// tracing filter used when RUST_LOG is not set
    pub log: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOrderSetting {
    #[default]
    ColumnMajor,
    RowMajor,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IndexPolicySetting {
    #[default]
    Clamp,
    Strict,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionSetting {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<ScanOrderSetting> for ScanOrder {
    fn from(s: ScanOrderSetting) -> Self {
        match s {
            ScanOrderSetting::ColumnMajor => ScanOrder::ColumnMajor,
            ScanOrderSetting::RowMajor => ScanOrder::RowMajor,
        }
    }
}

impl From<IndexPolicySetting> for IndexPolicy {
    fn from(s: IndexPolicySetting) -> Self {
        match s {
            IndexPolicySetting::Clamp => IndexPolicy::Clamp,
            IndexPolicySetting::Strict => IndexPolicy::Strict,
        }
    }
}

impl From<CompressionSetting> for png::Compression {
    fn from(s: CompressionSetting) -> Self {
        match s {
            CompressionSetting::Fast => png::Compression::Fast,
            CompressionSetting::Default => png::Compression::Default,
            CompressionSetting::Best => png::Compression::Best,
        }
    }
}

fn default_log() -> String {
    "palettizer=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_order: ScanOrderSetting::default(),
            index_policy: IndexPolicySetting::default(),
            compression: CompressionSetting::default(),
            optimize: false,
            log: default_log(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from `$PALETTIZER_CONFIG`, or use defaults.
    ///
    /// A file that is named explicitly but cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));

        match path {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a YAML file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }

    /// Parse settings from YAML text. `origin` is only used in error messages.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Options for the palette-remap core
    pub fn remap_options(&self) -> RemapOptions {
        RemapOptions::new()
            .scan_order(self.scan_order.into())
            .index_policy(self.index_policy.into())
    }
}
