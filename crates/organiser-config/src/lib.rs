use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use organiser_core::rules::PhoneRule;
use organiser_store::paths::{DEFAULT_CONTACTS_FILE, DEFAULT_EVENTS_FILE};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "organiser";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: Option<PathBuf>,
    pub contacts_file: String,
    pub events_file: String,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    pub strict_phone_numbers: bool,
}

impl ValidationConfig {
    pub fn phone_rule(&self) -> PhoneRule {
        if self.strict_phone_numbers {
            PhoneRule::Strict
        } else {
            PhoneRule::Unchecked
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            contacts_file: DEFAULT_CONTACTS_FILE.to_string(),
            events_file: DEFAULT_EVENTS_FILE.to_string(),
            validation: ValidationConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid data_dir value: {0}")]
    InvalidDataDir(PathBuf),
    #[error("invalid {field} value: {value} (expected a bare *.csv file name)")]
    InvalidFileName { field: &'static str, value: String },
    #[error("contacts_file and events_file must differ: {0}")]
    SharedFileName(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    contacts_file: Option<String>,
    events_file: Option<String>,
    validation: Option<ValidationFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidationFile {
    strict_phone_numbers: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(dir) = parsed.data_dir {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataDir(dir));
        }
        config.data_dir = Some(dir);
    }

    if let Some(name) = parsed.contacts_file {
        config.contacts_file = validate_file_name("contacts_file", name)?;
    }

    if let Some(name) = parsed.events_file {
        config.events_file = validate_file_name("events_file", name)?;
    }

    if config.contacts_file == config.events_file {
        return Err(ConfigError::SharedFileName(config.contacts_file));
    }

    if let Some(validation) = parsed.validation {
        if let Some(strict) = validation.strict_phone_numbers {
            config.validation.strict_phone_numbers = strict;
        }
    }

    Ok(config)
}

fn validate_file_name(field: &'static str, raw: String) -> Result<String> {
    let trimmed = raw.trim();
    let bare = Path::new(trimmed)
        .file_name()
        .is_some_and(|name| name == trimmed);
    let is_csv = trimmed.len() > ".csv".len() && trimmed.to_ascii_lowercase().ends_with(".csv");
    if !bare || !is_csv {
        return Err(ConfigError::InvalidFileName { field, value: raw });
    }
    Ok(trimmed.to_string())
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
