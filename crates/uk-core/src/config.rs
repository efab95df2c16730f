use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Build, dev-server and test-runner settings loaded from `ui-kit.toml`.
///
/// Every section is optional; a missing file or an empty one yields the
/// defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub serve: ServeSection,
    #[serde(default)]
    pub test: TestSection,
}

pub const DEFAULT_FILE_NAME: &str = "ui-kit.toml";

impl BuildConfig {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!(path = %path.display(), "no build config found, using defaults");
            let cfg = BuildConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: BuildConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build.validate()?;
        self.serve.validate()?;
        self.test.validate()?;
        Ok(())
    }

    /// Socket address string for the dev server, e.g. `127.0.0.1:5173`.
    pub fn serve_addr(&self) -> String {
        format!("{}:{}", self.serve.host, self.serve.port)
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Asset pipeline plugins, applied in order by the bundler.
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,
    /// Production output directory.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            out_dir: default_out_dir(),
            public_url: default_public_url(),
        }
    }
}

impl BuildSection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.out_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "build.out_dir must not be empty".to_string(),
            ));
        }
        if !self.public_url.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "build.public_url '{}' must start with '/'",
                self.public_url
            )));
        }
        let mut names = std::collections::BTreeSet::new();
        for plugin in &self.plugins {
            let name = plugin.trim();
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "build.plugins entries must be non-empty".to_string(),
                ));
            }
            if !names.insert(name) {
                return Err(ConfigError::Validation(format!(
                    "build.plugins contains duplicate plugin '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn default_plugins() -> Vec<String> {
    vec!["leptos".into(), "tailwind".into()]
}
fn default_out_dir() -> String {
    "dist".into()
}
fn default_public_url() -> String {
    "/".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServeSection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation(
                "serve.port must be non-zero".to_string(),
            ));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "serve.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    5173
}

pub const TEST_ENVIRONMENTS: [&str; 4] = ["node", "browser", "headless-chrome", "headless-firefox"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSection {
    /// Where wasm tests run; one of [`TEST_ENVIRONMENTS`].
    #[serde(default = "default_test_environment")]
    pub environment: String,
    #[serde(default)]
    pub setup_files: Vec<String>,
}

impl Default for TestSection {
    fn default() -> Self {
        Self {
            environment: default_test_environment(),
            setup_files: Vec::new(),
        }
    }
}

impl TestSection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !TEST_ENVIRONMENTS.contains(&self.environment.as_str()) {
            return Err(ConfigError::Validation(format!(
                "test.environment '{}' must be one of {}",
                self.environment,
                TEST_ENVIRONMENTS.join(", ")
            )));
        }
        Ok(())
    }
}

fn default_test_environment() -> String {
    "headless-chrome".into()
}
