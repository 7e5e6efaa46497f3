use std::{
    collections::HashMap,
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

const CONFIG_DIR: &str = "leo_report";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable overriding the workbook path at load time.
pub const EXCEL_PATH_ENV: &str = "EXCEL_PATH";

/// Conversion rates applied when no table is configured, quoted against INR.
static DEFAULT_RATES: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    HashMap::from([
        ("INR".to_string(), 1.0),
        ("USD".to_string(), 83.0),
        ("EUR".to_string(), 90.0),
        ("GBP".to_string(), 105.0),
        ("AED".to_string(), 22.6),
    ])
});

/// Externally supplied settings for one reporting core instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub excel_path: PathBuf,
    pub sheet_name: String,
    pub base_currency: String,
    pub rates: HashMap<String, f64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            excel_path: PathBuf::from("PostShipment Master UpdatedFy25.xlsm"),
            sheet_name: "MASTER".into(),
            base_currency: "INR".into(),
            rates: DEFAULT_RATES.clone(),
        }
    }
}

/// Loads and saves the configuration file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// absent. `EXCEL_PATH` in the environment overrides the workbook path
    /// either way.
    pub fn load(&self) -> Result<ReportConfig, ReportError> {
        let mut config: ReportConfig = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            ReportConfig::default()
        };
        if let Ok(path) = env::var(EXCEL_PATH_ENV) {
            if !path.trim().is_empty() {
                config.excel_path = PathBuf::from(path);
            }
        }
        Ok(config)
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
