//! estudio/<fecha>.txt への追記（日付ごとに 1 ファイル）

use common::error::Error;
use common::ports::outbound::FileSystem;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{ResolvedDate, StudyRecord};
use crate::ports::outbound::StudySink;

pub const STUDY_DIR_NAME: &str = "estudio";
const UNSPECIFIED_FILE_STEM: &str = "sin-fecha";

pub struct StudyPlanSink {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl StudyPlanSink {
    pub fn new(fs: Arc<dyn FileSystem>, data_dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            dir: data_dir.as_ref().join(STUDY_DIR_NAME),
            write_lock: Mutex::new(()),
        }
    }

    /// 日付未指定は sin-fecha.txt にまとめる
    pub fn path_for(&self, date: ResolvedDate) -> PathBuf {
        let stem = match date {
            ResolvedDate::On(d) => d.format("%Y-%m-%d").to_string(),
            ResolvedDate::Unspecified => UNSPECIFIED_FILE_STEM.to_string(),
        };
        self.dir.join(format!("{}.txt", stem))
    }
}

fn format_line(record: &StudyRecord) -> String {
    let kanji: String = record.kanji.iter().collect();
    format!(
        "{} | {} | {} min\n",
        record.objective,
        if kanji.is_empty() { "-" } else { kanji.as_str() },
        record.duration_minutes
    )
}

impl StudySink for StudyPlanSink {
    fn save(&self, record: &StudyRecord) -> Result<(), Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::io_msg("study writer lock poisoned"))?;
        self.fs.create_dir_all(&self.dir)?;
        let path = self.path_for(record.date);
        let write_header = self
            .fs
            .metadata(&path)
            .map(|m| m.is_empty())
            .unwrap_or(true);
        let mut w = self.fs.open_append(&path)?;
        let mut text = String::new();
        if write_header {
            text.push_str(&format!("# Plan de estudio {}\n", record.date));
        }
        text.push_str(&format_line(record));
        w.write_all(text.as_bytes())
            .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
        w.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}
