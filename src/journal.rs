//! Append-only progress journal
//!
//! The batch job records one line per completed stage to a journal file that
//! is never rotated or truncated. The sink is a capability passed explicitly
//! to the pipeline and query runner, so tests can substitute an in-memory
//! double and assert on what was (or was not) recorded.

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sink for stage-completion messages.
pub trait Journal {
    /// Record one progress message.
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written.
    fn record(&self, message: &str) -> Result<()>;
}

/// File-backed journal appending `YYYY-MM-DD HH:MM:SS : <message>` lines.
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Journal for FileJournal {
    fn record(&self, message: &str) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} : {}", timestamp, message)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lines_are_appended_with_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.log");
        let journal = FileJournal::new(&path);

        journal.record("first message").unwrap();
        journal.record("second message").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" : first message"));
        assert!(lines[1].ends_with(" : second message"));
        // timestamp is date-then-time separated from the message by " : "
        let (stamp, _) = lines[0].split_once(" : ").unwrap();
        assert_eq!(stamp.len(), "2023-01-01 00:00:00".len());
    }
}
