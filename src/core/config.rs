//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.rail-ledger/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A `[[trains]]` list replaces the built-in three-train catalog.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::{Catalog, NewTrain};
use crate::core::error::CatalogError;
use crate::core::schedule::parse_hhmm;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub trains: Vec<TrainEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Capacity for trains that don't set their own.
    pub total_seats: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainEntry {
    pub name: String,
    pub source: String,
    pub destination: String,
    /// `HH:mm`
    pub departure: String,
    /// `HH:mm`
    pub arrival: String,
    pub total_seats: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "rail-ledger.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_TOTAL_SEATS: &str = "RAIL_LEDGER_SEATS";
pub const ENV_LOG_LEVEL: &str = "RAIL_LEDGER_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "RAIL_LEDGER_LOG_FILE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub total_seats: u32,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub catalog: Catalog,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub total_seats: Option<u32>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

// ============================================================================
// Loading
// ============================================================================

/// A message produced while loading config, held until a logger exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

/// A parsed config plus whatever loading had to say about it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: LedgerConfig,
    pub notes: Vec<ConfigNote>,
}

impl LoadedConfig {
    fn note(&mut self, level: Level, message: impl Into<String>) {
        self.notes.push(ConfigNote {
            level,
            message: message.into(),
        });
    }

    /// Replays the load notes through `log`. Call after the logger is set up.
    pub fn log_notes(&self) {
        for note in &self.notes {
            log!(note.level, "{}", note.message);
        }
    }
}

/// Returns the path to `~/.rail-ledger/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rail-ledger").join("config.toml"))
}

/// Load config from `~/.rail-ledger/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LedgerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_or_generate(&path),
        None => {
            let mut loaded = LoadedConfig::default();
            loaded.note(
                Level::Warn,
                "Could not determine home directory, using default config",
            );
            Ok(loaded)
        }
    }
}

/// Loads `path`, writing the commented default there first if it is missing.
fn load_or_generate(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return load_config_from(path);
    }

    let mut loaded = LoadedConfig::default();
    loaded.note(
        Level::Info,
        format!("No config file found, generating default at {}", path.display()),
    );
    if let Err(e) = generate_default_config(path) {
        loaded.note(Level::Warn, format!("Failed to write default config: {e}"));
    }
    Ok(loaded)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut loaded = LoadedConfig {
        config: toml::from_str(&contents)?,
        notes: Vec::new(),
    };
    loaded.note(Level::Info, format!("Loaded config from {}", path.display()));
    let dump = format!("Config: {:?}", loaded.config);
    loaded.note(Level::Debug, dump);
    Ok(loaded)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# rail-ledger configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# total_seats = 100                  # Or set RAIL_LEDGER_SEATS

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "rail-ledger.log"           # Or set RAIL_LEDGER_LOG_FILE

# Listing any trains replaces the built-in catalog.
# [[trains]]
# name = "Train 1"
# source = "Boston"
# destination = "Portland"
# departure = "00:55"
# arrival = "23:00"
# total_seats = 100
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LedgerConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |var| std::env::var(var).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &LedgerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Seats: CLI → env → config → default
    // The env value is only parsed when the CLI leaves seats unset.
    let total_seats = cli
        .total_seats
        .map(Ok)
        .or_else(|| env(ENV_TOTAL_SEATS).map(parse_env_seats))
        .transpose()?
        .or(config.general.total_seats)
        .unwrap_or(crate::core::train::DEFAULT_TOTAL_SEATS);

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .clone()
        .or_else(|| env(ENV_LOG_LEVEL))
        .or_else(|| config.logging.level.clone())
    {
        Some(level) => level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(level))?,
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let catalog = build_catalog(&config.trains, total_seats)?;

    Ok(ResolvedConfig {
        total_seats,
        log_level,
        log_file,
        catalog,
    })
}

fn parse_env_seats(value: String) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidEnv {
            var: ENV_TOTAL_SEATS,
            value,
        })
}

/// Configured trains, or the seed catalog when none are listed.
fn build_catalog(entries: &[TrainEntry], total_seats: u32) -> Result<Catalog, ConfigError> {
    if entries.is_empty() {
        if total_seats == 0 {
            return Err(CatalogError::ZeroCapacity("seed catalog".to_string()).into());
        }
        return Ok(Catalog::seeded_with_capacity(total_seats));
    }

    let new_trains = entries
        .iter()
        .map(|entry| entry.to_new_train(total_seats))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::from_new_trains(new_trains)?)
}

impl TrainEntry {
    fn to_new_train(&self, default_seats: u32) -> Result<NewTrain, CatalogError> {
        let time = |value: &str| {
            parse_hhmm(value).map_err(|_| CatalogError::InvalidTime {
                train: self.name.clone(),
                value: value.to_string(),
            })
        };
        Ok(NewTrain {
            name: self.name.clone(),
            source: self.source.clone(),
            destination: self.destination.clone(),
            departure: time(&self.departure)?,
            arrival: time(&self.arrival)?,
            total_seats: self.total_seats.unwrap_or(default_seats),
        })
    }
}
