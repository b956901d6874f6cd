use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Deserialize;

use crate::CliError;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "schemadrift.toml";

pub const DEFAULT_LOCAL_DUMP: &str = "local_schema_detail.txt";
pub const DEFAULT_REMOTE_DUMP: &str = "supabase_schema_detail.txt";
pub const DEFAULT_REPORT: &str = "COMPARACION_BD.md";
pub const DEFAULT_FIX_SQL: &str = "fix_missing_columns.sql";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub paths: PathSettings,
    pub logging: LoggingSettings,
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    pub local: PathBuf,
    pub remote: PathBuf,
    /// Report file; each run appends to it.
    pub report: PathBuf,
    /// Fix script; replaced whenever a run has column gaps to fix.
    pub fix_sql: PathBuf,
    /// Optional JSON export of the diff.
    pub json: Option<PathBuf>,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            local: PathBuf::from(DEFAULT_LOCAL_DUMP),
            remote: PathBuf::from(DEFAULT_REMOTE_DUMP),
            report: PathBuf::from(DEFAULT_REPORT),
            fix_sql: PathBuf::from(DEFAULT_FIX_SQL),
            json: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub format: LogFormat,
}

/// Command-line overrides; each one wins over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Local schema dump.
    #[arg(long, value_name = "PATH")]
    pub local: Option<PathBuf>,
    /// Remote schema dump.
    #[arg(long, value_name = "PATH")]
    pub remote: Option<PathBuf>,
    /// Report file to append to.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
    /// Fix script to write.
    #[arg(long, value_name = "PATH")]
    pub sql: Option<PathBuf>,
    /// Also write the diff as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
    /// Log line format on stderr.
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        let Overrides {
            local,
            remote,
            report,
            sql,
            json,
            log_format,
        } = overrides;

        if let Some(local) = local {
            self.paths.local = local;
        }
        if let Some(remote) = remote {
            self.paths.remote = remote;
        }
        if let Some(report) = report {
            self.paths.report = report;
        }
        if let Some(sql) = sql {
            self.paths.fix_sql = sql;
        }
        if json.is_some() {
            self.paths.json = json;
        }
        if let Some(format) = log_format {
            self.logging.format = format;
        }
    }
}

/// Load settings from an explicit config file, or from
/// [`DEFAULT_CONFIG_FILE`] when it exists. The file is never created.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    Settings::from_toml(&content).map_err(|source| CliError::Config { path, source })
}
