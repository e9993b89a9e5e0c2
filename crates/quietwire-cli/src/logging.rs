use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

/// Writes every diagnostic line to stderr and to the run's log file.
#[derive(Clone)]
struct Tee {
    file: Arc<Mutex<File>>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.lock().flush()
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize diagnostics: stderr plus a timestamped log file under the user
/// state directory. Returns the log path when one could be created; without
/// one, diagnostics still go to stderr.
pub fn init() -> Option<PathBuf> {
    match open_log_file() {
        Some((path, file)) => {
            let tee = Tee {
                file: Arc::new(Mutex::new(file)),
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(move || tee.clone())
                .try_init()
                .ok();
            Some(path)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .try_init()
                .ok();
            None
        }
    }
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)?
        .join("quietwire");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(format!(
        "quietwire-{}.log",
        Local::now().format("%Y%m%d-%H%M%S")
    ));
    let file = File::create(&path).ok()?;
    Some((path, file))
}
