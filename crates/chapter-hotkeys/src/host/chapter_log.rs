use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use chapter_hotkeys_core::ChapterRecorder;
use tracing::{info, warn};

/// Chapter recorder that appends `<elapsed>\t<name>` lines to a text file.
///
/// Elapsed time counts from when the log was opened, which stands in for the
/// start of the recording.
pub struct ChapterLog {
    path: PathBuf,
    started_at: Instant,
}

impl ChapterLog {
    /// Start a log at `path`; the clock starts now.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            started_at: Instant::now(),
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl ChapterRecorder for ChapterLog {
    fn add_chapter(&self, name: &str) {
        let elapsed = format_elapsed(self.started_at.elapsed());

        match self.append(&format!("{}\t{}", elapsed, name)) {
            Ok(()) => info!(chapter = %name, elapsed = %elapsed, "Chapter marker added"),
            Err(e) => warn!(chapter = %name, error = %e, "Failed to write chapter marker"),
        }
    }
}

/// `HH:MM:SS.mmm`
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let (hours, rest) = (millis / 3_600_000, millis % 3_600_000);
    let (minutes, rest) = (rest / 60_000, rest % 60_000);
    let (seconds, millis) = (rest / 1000, rest % 1000);

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}
