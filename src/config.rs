//! Configuration loader and validator for the outfit feed materializer.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub store: Store,
    pub output: Output,
}

/// Remote document store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    pub project_id: String,
    pub collection: String,
}

/// Destination of the generated feed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
}

impl Default for Config {
    /// Compiled-in defaults matching the production site, used when the CLI
    /// is invoked without a config file.
    fn default() -> Self {
        Config {
            store: Store {
                project_id: "shop-website-c1a5f".into(),
                collection: "outfits".into(),
            },
            output: Output {
                path: PathBuf::from("src/data/outfits.json"),
            },
        }
    }
}

/// Load configuration from a YAML file and validate it.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Load configuration from a YAML file, or fall back to the compiled-in
/// defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => load(p),
        None => Ok(Config::default()),
    }
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.store.project_id.trim().is_empty() {
        return Err(ConfigError::Invalid("store.project_id must be non-empty"));
    }
    if cfg.store.collection.trim().is_empty() {
        return Err(ConfigError::Invalid("store.collection must be non-empty"));
    }
    if cfg.output.path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid("output.path must be non-empty"));
    }
    Ok(())
}

/// Example YAML matching the compiled-in defaults.
pub fn example() -> &'static str {
    r#"store:
  project_id: "shop-website-c1a5f"
  collection: "outfits"

output:
  path: "src/data/outfits.json"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_example_ok() {
        let cfg: Config = serde_yaml::from_str(example()).unwrap();
        validate(&cfg).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn invalid_project_id() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.store.project_id = "".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("store.project_id")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn invalid_collection() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.store.collection = "  ".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("store.collection")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn invalid_output_path() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.output.path = PathBuf::new();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("output.path")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn load_from_file_ok() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.yaml");
        fs::write(&p, example()).unwrap();
        let cfg = load(&p).unwrap();
        assert_eq!(cfg.store.collection, "outfits");
    }

    #[test]
    fn load_or_default_without_path() {
        let cfg = load_or_default(None).unwrap();
        assert_eq!(cfg.store.project_id, "shop-website-c1a5f");
        assert_eq!(cfg.output.path, PathBuf::from("src/data/outfits.json"));
    }
}
