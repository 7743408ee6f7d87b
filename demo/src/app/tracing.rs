use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable with the console log filter.
pub const CONSOLE_LOG: &str = "CONSOLE_LOG";
/// Environment variable with the file log filter. File logging is enabled when it is set.
pub const FILE_LOG: &str = "FILE_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  log_file_path: Option<PathBuf>,
}
impl AppTracingBuilder {
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }

  /// Install the global subscriber, logging to the console with the filter from [`CONSOLE_LOG`], and to the log file
  /// (if set) with the filter from [`FILE_LOG`]. Both filters default to `info`.
  pub fn build(self) -> AppTracing {
    let console_filter = env_filter(CONSOLE_LOG);
    let file = self.log_file_path.as_ref().map(|p| (p.as_path(), env_filter(FILE_LOG)));
    AppTracing::new(console_filter, file)
  }
}

fn env_filter(var: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installed tracing. Keep alive until the end of `main` so that buffered file logs are flushed.
pub struct AppTracing {
  _file_guard: Option<WorkerGuard>,
}

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(&Path, EnvFilter)>) -> Self {
    let mut open_error = None;
    let (file_layer, _file_guard) = match file {
      Some((file_path, filter)) => match open_log_file(file_path) {
        Ok(log_file) => {
          let (writer, guard) = tracing_appender::non_blocking(BufWriter::new(log_file));
          let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter);
          (Some(layer), Some(guard))
        }
        Err(e) => {
          open_error = Some((file_path, e));
          (None, None)
        }
      },
      None => (None, None),
    };

    tracing_subscriber::registry()
      .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_filter(console_filter))
      .with(file_layer)
      .init();
    if let Some((file_path, cause)) = open_error {
      tracing::warn!(%cause, "cannot log to file '{}'; logging to the console only", file_path.display());
    }

    Self { _file_guard }
  }
}

/// Truncate or create the log file at `file_path`, creating its parent directories first.
fn open_log_file(file_path: &Path) -> io::Result<File> {
  if let Some(parent) = file_path.parent() {
    create_dir_all(parent)?;
  }
  File::create(file_path)
}
