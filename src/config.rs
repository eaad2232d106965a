//! Application configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--config`, `--theme`, `--root-label`, etc.)
//! 2. `$DRIVE_TUI_CONFIG` environment variable (path to config file)
//! 3. Project-local `.drive-tui.toml` in the current working directory
//! 4. Global `~/.config/drive-tui/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::drive::navigator::DEFAULT_ROOT_LABEL;

// ── Section configs ──────────────────────────────────────────────────────────

/// General application settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Label of the root breadcrumb.
    pub root_label: Option<String>,
    /// JSON dataset to browse instead of the built-in one; relative to the config file.
    pub data_path: Option<String>,
    /// Enable mouse support.
    pub mouse: Option<bool>,
    /// File that receives log records. Logging is off when unset.
    pub log_file: Option<String>,
    /// Maximum log level: "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
}

/// Listing table settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListingConfig {
    /// Use nerd font icons (false = ASCII fallback).
    pub use_icons: Option<bool>,
    /// Show the Type column.
    pub show_type_column: Option<bool>,
}

/// Color settings for a single theme palette.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub app_bg: Option<String>,
    pub app_fg: Option<String>,
    pub panel_bg: Option<String>,
    pub header_row_bg: Option<String>,
    pub selected_bg: Option<String>,
    pub folder_icon_fg: Option<String>,
    pub file_icon_fg: Option<String>,
    pub link_fg: Option<String>,
    pub type_fg: Option<String>,
    pub separator_fg: Option<String>,
    pub button_bg: Option<String>,
    pub primary_button_bg: Option<String>,
    pub status_bg: Option<String>,
    pub status_fg: Option<String>,
    pub border_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light", "custom".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub listing: ListingConfig,
    pub theme: ThemeConfig,
}

/// Default maximum log level.
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path; that is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("DRIVE_TUI_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".drive-tui.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("drive-tui").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning on stderr).
///
/// Relative `data_path` and `log_file` values are resolved against the
/// directory holding the file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppConfig>(&content) {
        Ok(mut cfg) => {
            if let Some(base) = path.parent() {
                resolve_against(base, &mut cfg.general.data_path);
                resolve_against(base, &mut cfg.general.log_file);
            }
            Some(cfg)
        }
        Err(e) => {
            log::warn!("failed to parse config file {}: {}", path.display(), e);
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

fn resolve_against(base: &Path, value: &mut Option<String>) {
    if let Some(raw) = value.as_mut() {
        if Path::new(raw.as_str()).is_relative() {
            *raw = base.join(raw.as_str()).display().to_string();
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                root_label: other
                    .general
                    .root_label
                    .clone()
                    .or(self.general.root_label),
                data_path: other.general.data_path.clone().or(self.general.data_path),
                mouse: other.general.mouse.or(self.general.mouse),
                log_file: other.general.log_file.clone().or(self.general.log_file),
                log_level: other.general.log_level.clone().or(self.general.log_level),
            },
            listing: ListingConfig {
                use_icons: other.listing.use_icons.or(self.listing.use_icons),
                show_type_column: other
                    .listing
                    .show_type_column
                    .or(self.listing.show_type_column),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: other.theme.custom.clone().or(self.theme.custom),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Walk lowest priority first so higher-priority files overwrite.
        for path in candidate_paths().iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            if let Some(file_cfg) = load_file(cli_path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Label of the root breadcrumb.
    pub fn root_label(&self) -> &str {
        self.general
            .root_label
            .as_deref()
            .unwrap_or(DEFAULT_ROOT_LABEL)
    }

    /// Dataset file, if one is configured.
    pub fn data_path(&self) -> Option<&Path> {
        self.general.data_path.as_deref().map(Path::new)
    }

    /// Whether mouse support is enabled.
    pub fn mouse_enabled(&self) -> bool {
        self.general.mouse.unwrap_or(true)
    }

    /// Log file, if logging is enabled.
    pub fn log_file(&self) -> Option<&Path> {
        self.general.log_file.as_deref().map(Path::new)
    }

    /// Maximum log level; unknown names fall back to the default.
    pub fn log_level(&self) -> log::LevelFilter {
        self.general
            .log_level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Whether to use nerd font icons.
    pub fn use_icons(&self) -> bool {
        self.listing.use_icons.unwrap_or(true)
    }

    /// Whether the Type column is shown.
    pub fn show_type_column(&self) -> bool {
        self.listing.show_type_column.unwrap_or(true)
    }

    /// Theme scheme: "dark", "light", or "custom".
    pub fn theme_scheme(&self) -> &str {
        self.theme.scheme.as_deref().unwrap_or("dark")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
