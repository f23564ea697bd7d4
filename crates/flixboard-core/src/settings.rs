use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name of the originals dataset (Windows-1252 encoded).
pub const ORIGINALS_FILE: &str = "NetflixOriginals.csv";
/// Default file name of the general catalog dataset.
pub const CATALOG_FILE: &str = "netflix1.csv";
/// Default file name of the stock price dataset.
pub const STOCK_FILE: &str = "netflix.csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Netflix Originals / stock dashboard in the terminal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "flixboard",
    about = "Merge Netflix Originals, catalog ratings and stock prices into a terminal dashboard",
    version
)]
pub struct Settings {
    /// View mode
    #[arg(long, default_value = "dashboard", value_parser = ["dashboard", "table", "quarterly"])]
    pub view: String,

    /// Directory containing the three source CSV files
    #[arg(long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Override the originals CSV path
    #[arg(long)]
    pub originals_file: Option<PathBuf>,

    /// Override the catalog CSV path
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,

    /// Override the stock price CSV path
    #[arg(long)]
    pub stock_file: Option<PathBuf>,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── DataPaths ──────────────────────────────────────────────────────────────────

/// Resolved locations of the three source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub originals: PathBuf,
    pub catalog: PathBuf,
    pub stock: PathBuf,
}

impl Settings {
    /// Resolve the three source file paths from `data_dir` plus any explicit
    /// per-file overrides.
    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            originals: self
                .originals_file
                .clone()
                .unwrap_or_else(|| self.data_dir.join(ORIGINALS_FILE)),
            catalog: self
                .catalog_file
                .clone()
                .unwrap_or_else(|| self.data_dir.join(CATALOG_FILE)),
            stock: self
                .stock_file
                .clone()
                .unwrap_or_else(|| self.data_dir.join(STOCK_FILE)),
        }
    }
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.flixboard/last_used.json`.
///
/// Only presentation preferences are persisted; data locations always come
/// from the command line so a stale path can never shadow an explicit one.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(".flixboard").join("last_used.json")
    }

    /// Load persisted params from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &Path,
    ) -> Self {
        // Build raw ArgMatches so we can query ValueSource.
        let matches = Settings::command().get_matches_from(args.clone());

        // Parse into the typed struct using the same args.
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            return Self::apply_debug(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // Merge last-used values for fields that were NOT explicitly set on
        // the command line (CLI always wins).
        if !is_arg_explicitly_set(&matches, "view") {
            if let Some(v) = last.view {
                settings.view = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "theme") {
            if let Some(v) = last.theme {
                settings.theme = v;
            }
        }

        settings = Self::apply_debug(settings);

        // Persist current settings for next run.
        let params = LastUsedParams::from(&settings);
        let _ = params.save_to(config_path);

        settings
    }

    /// `--debug` overrides the log level.
    fn apply_debug(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            theme: Some(s.theme.clone()),
            view: Some(s.view.clone()),
        }
    }
}

// ── Helper: check if an arg was explicitly set on the command line ─────────────

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tmp_config_path(tmp: &TempDir) -> PathBuf {
        LastUsedParams::config_path_in(tmp.path())
    }

    // ── LastUsedParams persistence ───────────────────────────────────────────

    #[test]
    fn test_last_used_params_save_load() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            view: Some("table".to_string()),
        };

        params.save_to(&path).expect("save");
        let loaded = LastUsedParams::load_from(&path);

        assert_eq!(loaded.theme, Some("dark".to_string()));
        assert_eq!(loaded.view, Some("table".to_string()));
    }

    #[test]
    fn test_last_used_params_clear() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            theme: Some("light".to_string()),
            ..Default::default()
        };
        params.save_to(&path).expect("save");
        assert!(path.exists(), "file must exist after save");

        LastUsedParams::clear_at(&path).expect("clear");
        assert!(!path.exists(), "file must be gone after clear");
    }

    #[test]
    fn test_last_used_params_default_when_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let loaded = LastUsedParams::load_from(&tmp_config_path(&tmp));
        assert!(loaded.theme.is_none());
        assert!(loaded.view.is_none());
    }

    // ── Settings defaults ────────────────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["flixboard"]);

        assert_eq!(settings.view, "dashboard");
        assert_eq!(settings.data_dir, PathBuf::from("./data"));
        assert!(settings.originals_file.is_none());
        assert!(settings.catalog_file.is_none());
        assert!(settings.stock_file.is_none());
        assert_eq!(settings.theme, "auto");
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.clear);
    }

    // ── data_paths ───────────────────────────────────────────────────────────

    #[test]
    fn test_data_paths_default_names_under_data_dir() {
        let settings = Settings::parse_from(["flixboard", "--data-dir", "/srv/netflix"]);
        let paths = settings.data_paths();

        assert_eq!(paths.originals, PathBuf::from("/srv/netflix").join(ORIGINALS_FILE));
        assert_eq!(paths.catalog, PathBuf::from("/srv/netflix").join(CATALOG_FILE));
        assert_eq!(paths.stock, PathBuf::from("/srv/netflix").join(STOCK_FILE));
    }

    #[test]
    fn test_data_paths_per_file_override_wins() {
        let settings = Settings::parse_from([
            "flixboard",
            "--stock-file",
            "/tmp/custom-stock.csv",
        ]);
        let paths = settings.data_paths();

        assert_eq!(paths.stock, PathBuf::from("/tmp/custom-stock.csv"));
        // The other two still resolve under data_dir.
        assert_eq!(paths.originals, PathBuf::from("./data").join(ORIGINALS_FILE));
    }

    // ── load_with_last_used (uses config path injection) ─────────────────────

    #[test]
    fn test_load_with_last_used_merges_persisted_theme() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            view: Some("dashboard".to_string()),
        };
        params.save_to(&config_path).expect("save");

        let settings = Settings::load_with_last_used_impl(vec!["flixboard".into()], &config_path);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_load_with_last_used_cli_overrides_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            view: Some("quarterly".to_string()),
        };
        params.save_to(&config_path).expect("save");

        let settings = Settings::load_with_last_used_impl(
            vec!["flixboard".into(), "--theme".into(), "light".into()],
            &config_path,
        );
        assert_eq!(settings.theme, "light");
        // view was not given on the CLI → persisted value applies.
        assert_eq!(settings.view, "quarterly");
    }

    #[test]
    fn test_load_with_last_used_clear_removes_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let params = LastUsedParams {
            theme: Some("classic".to_string()),
            ..Default::default()
        };
        params.save_to(&config_path).expect("save");
        assert!(config_path.exists(), "file must exist before clear");

        Settings::load_with_last_used_impl(
            vec!["flixboard".into(), "--clear".into()],
            &config_path,
        );

        assert!(!config_path.exists(), "file must be gone after --clear");
    }

    #[test]
    fn test_load_with_last_used_debug_overrides_log_level() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let settings = Settings::load_with_last_used_impl(
            vec!["flixboard".into(), "--debug".into()],
            &config_path,
        );
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_with_last_used_persists_after_run() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        Settings::load_with_last_used_impl(
            vec!["flixboard".into(), "--theme".into(), "classic".into()],
            &config_path,
        );

        assert!(
            config_path.exists(),
            "config file must be persisted after run"
        );
        let loaded = LastUsedParams::load_from(&config_path);
        assert_eq!(loaded.theme, Some("classic".to_string()));
    }
}
