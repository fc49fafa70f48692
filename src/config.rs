use crate::error::{FolioError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_HIGHLIGHTED_REPO: &str = "Neural-Machine-Translation-Eng-Arb";

/// A statically configured project card shown above the GitHub carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

/// Viewport widths (px) at which the layout switches to 1 and 2 cards per row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768,
            tablet: 992,
        }
    }
}

/// Pixel size of one terminal cell, used to map layout geometry to pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CellSize {
    pub width_px: u16,
    pub height_px: u16,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width_px: 8,
            height_px: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    pub enabled: bool,
    pub threshold: f32,
    pub bottom_margin_px: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.1,
            bottom_margin_px: 40,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TruncationConfig {
    pub collapsed_lines: u16,
    pub slack_px: f32,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            collapsed_lines: 4,
            slack_px: 10.0,
        }
    }
}

/// Which page containers the layout provides. Features whose containers are
/// missing are skipped instead of failing the whole page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContainers {
    pub loading: bool,
    pub track: bool,
    pub prev: bool,
    pub next: bool,
    pub dots: bool,
}

impl Default for PageContainers {
    fn default() -> Self {
        Self {
            loading: true,
            track: true,
            prev: true,
            next: true,
            dots: true,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub owner: String,
    pub github_token: Option<String>,
    pub api_base: Option<String>,
    pub per_page: u8,
    pub highlighted_repo: String,
    pub name: String,
    pub tagline: String,
    pub resize_debounce_ms: u64,
    #[serde(default = "default_highlights")]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub breakpoints: Breakpoints,
    #[serde(default)]
    pub cell: CellSize,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub truncation: TruncationConfig,
    #[serde(default)]
    pub page: PageContainers,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("owner", &self.owner)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("per_page", &self.per_page)
            .field("highlighted_repo", &self.highlighted_repo)
            .field("name", &self.name)
            .field("highlights", &self.highlights.len())
            .field("breakpoints", &self.breakpoints)
            .field("cell", &self.cell)
            .field("reveal", &self.reveal)
            .field("truncation", &self.truncation)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("page", &self.page)
            .finish()
    }
}

fn default_highlights() -> Vec<Highlight> {
    vec![Highlight {
        title: "Neural Machine Translation Eng Arb".to_string(),
        description: "Sequence-to-sequence translation between English and Arabic \
                      built on an attention-based encoder/decoder, trained and \
                      evaluated on a parallel corpus with BLEU scoring."
            .to_string(),
        tags: vec!["nlp".to_string(), "pytorch".to_string()],
        link: Some(format!("https://github.com/MHamdyK/{DEFAULT_HIGHLIGHTED_REPO}")),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: "MHamdyK".to_string(),
            github_token: None,
            api_base: None,
            per_page: 12,
            highlighted_repo: DEFAULT_HIGHLIGHTED_REPO.to_string(),
            name: "Portfolio".to_string(),
            tagline: String::new(),
            highlights: default_highlights(),
            breakpoints: Breakpoints::default(),
            cell: CellSize::default(),
            reveal: RevealConfig::default(),
            truncation: TruncationConfig::default(),
            resize_debounce_ms: 250,
            page: PageContainers::default(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>, owner: Option<String>) -> Self {
        let config_file = config_path.unwrap_or_else(default_config_file);
        match Self::figment(&config_file, owner).extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                tracing::warn!(error = %e, "config parse error, using defaults");
                Config::default()
            }
        }
    }

    fn figment(config_file: &Path, owner: Option<String>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment = figment.merge(Env::prefixed("FOLIO_").split("__")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(owner) = owner {
            figment = figment.merge(Serialized::default("owner", owner));
        }
        figment
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FolioError::Config(e.to_string()))
    }

    pub fn token(&self) -> Option<&str> {
        self.github_token.as_deref().filter(|t| !t.is_empty())
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn state_dir() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".local").join("state"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Opens `folio.log` for appending under `dir`, creating the directory.
pub fn open_log_file(dir: &Path) -> Result<std::fs::File> {
    std::fs::create_dir_all(dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))?;
    Ok(file)
}

fn default_config_file() -> PathBuf {
    config_dir().join("folio").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("missing.toml")), None);
        assert_eq!(config.per_page, 12);
        assert_eq!(config.breakpoints, Breakpoints::default());
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.highlighted_repo, DEFAULT_HIGHLIGHTED_REPO);
    }

    #[test]
    #[serial]
    fn file_and_cli_layering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "owner = \"from-file\"\nper_page = 30\n\n[truncation]\ncollapsed_lines = 6\nslack_px = 5.0"
        )
        .unwrap();

        let config = Config::load(Some(path.clone()), None);
        assert_eq!(config.owner, "from-file");
        assert_eq!(config.per_page, 30);
        assert_eq!(config.truncation.collapsed_lines, 6);

        let config = Config::load(Some(path), Some("from-cli".to_string()));
        assert_eq!(config.owner, "from-cli");
    }

    #[test]
    #[serial]
    fn token_is_redacted_and_empty_token_ignored() {
        let config = Config {
            github_token: Some("secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));

        let config = Config {
            github_token: Some(String::new()),
            ..Config::default()
        };
        assert!(config.token().is_none());
    }

    #[test]
    fn log_file_is_created_under_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("state").join("folio");
        open_log_file(&log_dir).unwrap();
        assert!(log_dir.join("folio.log").is_file());
    }

    #[test]
    fn log_dir_blocked_by_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("folio");
        std::fs::write(&blocker, "").unwrap();
        let err = open_log_file(&blocker).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    #[serial]
    fn toml_output_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let original = Config {
            owner: "someone".to_string(),
            ..Config::default()
        };
        std::fs::write(&path, original.to_toml().unwrap()).unwrap();

        let loaded = Config::load(Some(path), None);
        assert_eq!(loaded.owner, "someone");
        assert_eq!(loaded.highlights, original.highlights);
    }
}
