use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialfield_core::{validate_debounce_ms, CoreError, FieldMode, InputKind, DEFAULT_DEBOUNCE_MS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialfield";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
pub const MAX_LOOKUP_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub debounce_ms: u64,
    pub input_kinds: Vec<InputKind>,
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            input_kinds: vec![InputKind::Tel],
            lookup: LookupSettings {
                endpoint: None,
                timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            },
        }
    }
}

impl AppConfig {
    pub fn field_mode(&self) -> Result<FieldMode> {
        FieldMode::from_kinds(&self.input_kinds).map_err(ConfigError::InvalidInputKinds)
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
    #[error("invalid debounce_ms value: {0}")]
    InvalidDebounceMs(u64),
    #[error("invalid input_kinds: {0}")]
    InvalidInputKinds(#[source] CoreError),
    #[error("invalid lookup timeout_secs value: {0}")]
    InvalidTimeoutSecs(u64),
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
    debounce_ms: Option<u64>,
    input_kinds: Option<Vec<InputKind>>,
    lookup: Option<LookupFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LookupFile {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
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

    if let Some(debounce_ms) = parsed.debounce_ms {
        let debounce_ms = validate_debounce_ms(debounce_ms)
            .map_err(|_| ConfigError::InvalidDebounceMs(debounce_ms))?;
        config.debounce_ms = debounce_ms;
    }

    if let Some(kinds) = parsed.input_kinds {
        FieldMode::from_kinds(&kinds).map_err(ConfigError::InvalidInputKinds)?;
        config.input_kinds = kinds;
    }

    if let Some(lookup) = parsed.lookup {
        if let Some(endpoint) = lookup.endpoint {
            config.lookup.endpoint = Some(endpoint);
        }
        if let Some(timeout_secs) = lookup.timeout_secs {
            if timeout_secs == 0 || timeout_secs > MAX_LOOKUP_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeoutSecs(timeout_secs));
            }
            config.lookup.timeout_secs = timeout_secs;
        }
    }

    Ok(config)
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

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigFile, LookupFile};
    use dialfield_core::InputKind;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            debounce_ms: Some(250),
            input_kinds: Some(vec![InputKind::Tel, InputKind::Sid]),
            lookup: Some(LookupFile {
                endpoint: Some("https://lookup.example.com/v1/phone".to_string()),
                timeout_secs: Some(5),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.debounce_ms, 250);
        assert_eq!(merged.input_kinds, vec![InputKind::Tel, InputKind::Sid]);
        assert_eq!(
            merged.lookup.endpoint.as_deref(),
            Some("https://lookup.example.com/v1/phone")
        );
        assert_eq!(merged.lookup.timeout_secs, 5);
    }

    #[test]
    fn merge_config_rejects_zero_debounce() {
        let parsed = ConfigFile {
            debounce_ms: Some(0),
            input_kinds: None,
            lookup: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("debounce_ms"));
    }

    #[test]
    fn merge_config_rejects_empty_input_kinds() {
        let parsed = ConfigFile {
            debounce_ms: None,
            input_kinds: Some(vec![]),
            lookup: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("input_kinds"));
    }

    #[test]
    fn merge_config_rejects_zero_timeout() {
        let parsed = ConfigFile {
            debounce_ms: None,
            input_kinds: None,
            lookup: Some(LookupFile {
                endpoint: None,
                timeout_secs: Some(0),
            }),
        };
        assert!(merge_config(parsed).is_err());
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_returns_none_for_optional_missing_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let loaded = load_at_path(&missing, false).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn load_at_path_parses_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "debounce_ms = 750\ninput_kinds = [\"tel\", \"sid\"]\n\n[lookup]\nendpoint = \"https://lookup.example.com\"\n",
        )
        .expect("write");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.debounce_ms, 750);
        assert_eq!(config.input_kinds, vec![InputKind::Tel, InputKind::Sid]);
        assert_eq!(
            config.lookup.endpoint.as_deref(),
            Some("https://lookup.example.com")
        );
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "debounce_delay = 750\n").expect("write");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "debounce_ms = 750\n").expect("write");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&path, perms).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("permissions"));
    }
}
