//! Native folder and save pickers.

use std::path::PathBuf;

use crate::config::{self, DataPathSource, MyCasesConfig};

const PICK_DATA_TITLE: &str = "اختر مجلد البيانات";
const SAVE_REPORT_TITLE: &str = "حفظ التقرير";

/// Resolve the data root, asking the user for a folder if none is usable.
///
/// The chosen folder is saved to the config file. Cancelling the picker is
/// an error, which exits the process with a non-zero status.
pub fn resolve_data_path(loaded: Option<&MyCasesConfig>) -> eyre::Result<PathBuf> {
    let env = std::env::var(config::DATA_PATH_ENV).ok();
    match config::data_path_source(env.as_deref(), loaded) {
        DataPathSource::Environment(path) => {
            std::fs::create_dir_all(&path)?;
            tracing::info!(path = %path.display(), "using data path from environment");
            Ok(path)
        }
        DataPathSource::Config(path) => Ok(path),
        DataPathSource::Missing => {
            let path = pick_data_folder()?;
            let mut updated = loaded
                .cloned()
                .unwrap_or_else(|| MyCasesConfig::new(&path));
            updated.data_path = path.clone();
            config::save_config(&updated)?;
            Ok(path)
        }
    }
}

fn pick_data_folder() -> eyre::Result<PathBuf> {
    loop {
        let Some(path) = rfd::FileDialog::new()
            .set_title(PICK_DATA_TITLE)
            .pick_folder()
        else {
            return Err(eyre::eyre!("no data folder selected"));
        };
        if config::is_usable_data_path(&path) {
            tracing::info!(path = %path.display(), "data folder selected");
            return Ok(path);
        }
        tracing::warn!(path = %path.display(), "selected folder is not usable, asking again");
    }
}

/// Ask where to save an export. `None` when the user cancels.
pub fn pick_export_path(suggested_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(SAVE_REPORT_TITLE)
        .set_file_name(suggested_name)
        .add_filter("PDF", &["pdf"])
        .add_filter("Word", &["docx"])
        .save_file()
}
