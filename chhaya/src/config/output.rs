//! Output configuration section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::io::FrameNaming;

use super::defaults;

/// Frame output section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSection {
    /// Output directory (created if missing)
    #[serde(default = "defaults::output_dir")]
    pub directory: String,

    /// File name prefix
    #[serde(default)]
    pub prefix: String,

    /// Zero-padded frame number width
    #[serde(default = "defaults::digits")]
    pub digits: usize,

    /// File extension
    #[serde(default = "defaults::extension")]
    pub extension: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: defaults::output_dir(),
            prefix: String::new(),
            digits: defaults::digits(),
            extension: defaults::extension(),
        }
    }
}

impl OutputSection {
    /// Convert to FrameNaming
    pub fn to_frame_naming(&self) -> FrameNaming {
        FrameNaming {
            directory: PathBuf::from(&self.directory),
            prefix: self.prefix.clone(),
            digits: self.digits,
            extension: self.extension.clone(),
        }
    }
}
