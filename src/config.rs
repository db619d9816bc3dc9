use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const APP_DIR: &str = "atividades";
const LOG_FILE: &str = "atividades.log";

#[derive(Debug, Parser)]
#[command(name = "atividades", version, about = "Terminal to-do list")]
pub struct Cli {
    /// Directory holding the task store. Defaults to the platform data dir.
    #[arg(long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log destination. Defaults to `atividades.log` inside the data dir.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir().ok_or_else(|| anyhow!("cannot determine data directory"))?;
        Ok(base.join(APP_DIR))
    }

    pub fn resolve_log_file(&self, data_dir: &Path) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| data_dir.join(LOG_FILE))
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Routes tracing output to `log_file`; the terminal belongs to the UI.
/// The returned guard must be held until exit so buffered lines get flushed.
pub fn init_tracing(log_file: &Path, verbose: u8) -> anyhow::Result<WorkerGuard> {
    let dir = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = log_file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("log path has no usable file name: {}", log_file.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(guard)
}
