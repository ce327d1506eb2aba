use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mycases_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the configured data root, and skips the folder picker.
pub const DATA_PATH_ENV: &str = "MYCASES_DATA_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyCasesConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding the case folders and the case id ledger.
    pub data_path: PathBuf,
    /// Arabic-capable TTF fonts for PDF export. Added in v1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    pub regular: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<PathBuf>,
}

impl MyCasesConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_path: data_path.into(),
            fonts: None,
        }
    }

    /// Export styles with the configured fonts applied.
    pub fn document_styles(&self) -> DocumentStyles {
        let mut styles = DocumentStyles::default();
        if let Some(fonts) = &self.fonts {
            styles.regular_font_path = Some(fonts.regular.clone());
            styles.bold_font_path = fonts.bold.clone();
        }
        styles
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.mycases.desktop"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<MyCasesConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<MyCasesConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MyCasesConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update MyCases."
        ));
    }

    // v0 → v1: the bare `{"data_path": ...}` file gains a version stamp.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if !obj.get("data_path").is_some_and(|v| v.is_string()) {
            return Err(eyre::eyre!("config has no data_path"));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(config: &MyCasesConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &MyCasesConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Whether `path` can serve as the data root.
pub fn is_usable_data_path(path: &Path) -> bool {
    path.is_absolute() && path.is_dir()
}

/// Where the data root comes from, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataPathSource {
    Environment(PathBuf),
    Config(PathBuf),
    Missing,
}

/// Pick the data root from the environment override or a loaded config.
///
/// A configured path that no longer exists counts as missing so the user
/// is asked again.
pub fn data_path_source(env: Option<&str>, config: Option<&MyCasesConfig>) -> DataPathSource {
    if let Some(raw) = env.map(str::trim).filter(|s| !s.is_empty()) {
        return DataPathSource::Environment(PathBuf::from(raw));
    }
    match config {
        Some(config) if is_usable_data_path(&config.data_path) => {
            DataPathSource::Config(config.data_path.clone())
        }
        Some(config) => {
            tracing::warn!(path = %config.data_path.display(), "configured data path is unusable");
            DataPathSource::Missing
        }
        None => DataPathSource::Missing,
    }
}
