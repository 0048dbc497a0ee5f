//! Append-only CSV log of per-game metrics.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::game::GameMetrics;

/// One line per finished game under a `score,num_moves,game_duration,did_win`
/// header.
#[derive(Debug)]
pub struct MetricsLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl MetricsLog {
    /// Create (or truncate) the log and write the header.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut writer = BufWriter::new(File::create(&path)?);
        writeln!(writer, "{}", GameMetrics::LOG_HEADER)?;
        log::debug!("created metrics log {}", path.display());
        Ok(Self { path, writer })
    }

    /// Append to an existing log; a missing or empty file gets the header.
    pub fn open_append(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let needs_header = std::fs::metadata(&path).map_or(true, |meta| meta.len() == 0);
        let file = File::options().create(true).append(true).open(&path)?;
        let mut writer = BufWriter::new(file);
        if needs_header {
            writeln!(writer, "{}", GameMetrics::LOG_HEADER)?;
        }
        Ok(Self { path, writer })
    }

    pub fn append(&mut self, metrics: &GameMetrics) -> io::Result<()> {
        writeln!(self.writer, "{}", metrics.log_line())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
