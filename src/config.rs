use crate::app::Page;
use clap::Parser;
use config::{Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_START_PAGE: Page = Page::Journal;
const DEFAULT_TICK_RATE_MS: u64 = 100;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SHOW_HELP_HINT: bool = true;
const DEFAULT_CURVE_SEGMENTS: usize = 12;
const MAX_CURVE_SEGMENTS: usize = 64;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Everything optional so that file and environment layers can leave gaps.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    start_page: Option<String>,
    tick_rate_ms: Option<u64>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
    show_help_hint: Option<bool>,
    curve_segments: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub start_page: Page,
    pub tick_rate_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub show_help_hint: bool,
    /// Line segments used to draw each connector curve.
    pub curve_segments: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_page: DEFAULT_START_PAGE,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            show_help_hint: DEFAULT_SHOW_HELP_HINT,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Adventurer's log: a retro RPG-styled personal journal", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Page to open first (journal, hobbies, projects, map, login)
    #[arg(long)]
    pub start_page: Option<String>,

    #[arg(long)]
    pub tick_rate_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(long)]
    pub show_help_hint: Option<bool>,

    #[arg(long)]
    pub curve_segments: Option<usize>,

    /// Raise log verbosity (-d debug, -dd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "quest-log")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("quest-log.log"))
}

/// Loads configuration: defaults, then the TOML file, then `QUEST_LOG__*`
/// environment variables, then command-line flags.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix("QUEST_LOG").separator("__");
    // Missing variables are not an error.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut builder = ConfigCrate::builder();
    if let Some(ref path) = config_file_path {
        builder = builder.add_source(File::from(path.clone()).required(false));
    }
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            builder = builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = builder.build()?.try_deserialize()?;

    let start_page = match args.start_page.clone().or(loaded.start_page) {
        Some(name) => Page::from_str(&name).map_err(ConfigError::ValidationError)?,
        None => DEFAULT_START_PAGE,
    };

    let config = AppConfig {
        start_page,
        tick_rate_ms: args
            .tick_rate_ms
            .or(loaded.tick_rate_ms)
            .unwrap_or(DEFAULT_TICK_RATE_MS),
        log_file: args
            .log_file
            .clone()
            .or(loaded.log_file)
            .or_else(default_log_path),
        log_level: args
            .log_level
            .clone()
            .or(loaded.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        show_help_hint: args
            .show_help_hint
            .or(loaded.show_help_hint)
            .unwrap_or(DEFAULT_SHOW_HELP_HINT),
        curve_segments: args
            .curve_segments
            .or(loaded.curve_segments)
            .unwrap_or(DEFAULT_CURVE_SEGMENTS),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tick_rate_ms == 0 {
        return Err(ConfigError::ValidationError(
            "tick_rate_ms must be at least 1".to_string(),
        ));
    }
    if config.curve_segments == 0 || config.curve_segments > MAX_CURVE_SEGMENTS {
        return Err(ConfigError::ValidationError(format!(
            "curve_segments must be between 1 and {MAX_CURVE_SEGMENTS}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ValueKind;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> CliArgs {
        let mut cmd = vec!["quest-log"];
        cmd.extend_from_slice(extra);
        CliArgs::try_parse_from(cmd).expect("Failed to parse test args")
    }

    // Points at a config file that does not exist so the user's own file
    // never leaks into tests.
    fn isolated(dir: &TempDir, extra: &[&str]) -> CliArgs {
        let missing = dir.path().join("absent.toml");
        let missing = missing.to_str().unwrap().to_string();
        let mut all = vec!["--config", missing.as_str()];
        all.extend_from_slice(extra);
        args(&all)
    }

    #[test]
    fn test_default_config() {
        let dir = TempDir::new().unwrap();
        let config = build_config(&isolated(&dir, &[]), None).expect("default config");

        assert_eq!(config.start_page, Page::Journal);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.curve_segments, DEFAULT_CURVE_SEGMENTS);
        assert!(config.show_help_hint);
    }

    #[test]
    fn test_file_layer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_page = \"map\"\ntick_rate_ms = 250\n").unwrap();

        let config = build_config(&args(&["--config", path.to_str().unwrap()]), None).unwrap();

        assert_eq!(config.start_page, Page::MindMap);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_env_override() {
        let dir = TempDir::new().unwrap();
        let mut overrides = Map::new();
        overrides.insert("tick_rate_ms".to_string(), Value::new(None, ValueKind::U64(40)));
        overrides.insert(
            "log_level".to_string(),
            Value::new(None, ValueKind::String("debug".to_string())),
        );

        let config = build_config(&isolated(&dir, &[]), Some(overrides)).unwrap();

        assert_eq!(config.tick_rate_ms, 40);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.curve_segments, DEFAULT_CURVE_SEGMENTS);
    }

    #[test]
    fn test_arg_beats_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_page = \"map\"\n").unwrap();

        let config = build_config(
            &args(&["--config", path.to_str().unwrap(), "--start-page", "hobbies"]),
            None,
        )
        .unwrap();

        assert_eq!(config.start_page, Page::Hobbies);
    }

    #[test]
    fn test_rejects_unknown_page() {
        let dir = TempDir::new().unwrap();
        let result = build_config(&isolated(&dir, &["--start-page", "tavern"]), None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let dir = TempDir::new().unwrap();
        let result = build_config(&isolated(&dir, &["--tick-rate-ms", "0"]), None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_debug_flag_counts() {
        assert_eq!(args(&["-dd"]).debug, 2);
    }
}
