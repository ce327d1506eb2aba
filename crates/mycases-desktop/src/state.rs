use mycases_export::shaping::{ArabicShaper, TextShaper};
use mycases_export::styles::DocumentStyles;
use mycases_storage::DataRoot;

use crate::config::MyCasesConfig;

/// Everything a command needs: where the data lives and how to export.
pub struct DesktopState {
    pub root: DataRoot,
    pub styles: DocumentStyles,
    pub shaper: Box<dyn TextShaper>,
}

impl DesktopState {
    pub fn new(root: DataRoot) -> Self {
        Self {
            root,
            styles: DocumentStyles::default(),
            shaper: Box::new(ArabicShaper),
        }
    }

    pub fn from_config(root: DataRoot, config: Option<&MyCasesConfig>) -> Self {
        let mut state = Self::new(root);
        if let Some(config) = config {
            state.styles = config.document_styles();
        }
        state
    }
}
