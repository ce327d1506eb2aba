use std::path::{Path, PathBuf};

use mycases_core::layout;

/// The directory under which every case folder and the ledger live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRoot {
    path: PathBuf,
}

impl DataRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ledger(&self) -> PathBuf {
        layout::ledger(&self.path)
    }

    pub fn case_dir(&self, folder: &str) -> PathBuf {
        layout::case_dir(&self.path, folder)
    }

    pub fn case_file(&self, folder: &str) -> PathBuf {
        layout::case_file(&self.path, folder)
    }

    pub fn surveys_dir(&self, folder: &str) -> PathBuf {
        layout::surveys_dir(&self.path, folder)
    }

    pub fn survey_file(&self, folder: &str, stem: &str) -> PathBuf {
        layout::survey_file(&self.path, folder, stem)
    }
}
