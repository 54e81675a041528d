//! Output file naming for frame sequences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Frame file naming: `{directory}/{prefix}{frame:0digits}.{extension}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameNaming {
    /// Output directory
    pub directory: PathBuf,
    /// File name prefix before the frame number
    pub prefix: String,
    /// Zero-padded width of the frame number
    pub digits: usize,
    /// File extension without the dot
    pub extension: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./frames"),
            prefix: String::new(),
            digits: 4,
            extension: "pnm".to_string(),
        }
    }
}

impl FrameNaming {
    /// File name (no directory) for `frame`.
    pub fn file_name(&self, frame: u32) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            frame,
            self.extension,
            width = self.digits
        )
    }

    /// Full output path for `frame`.
    pub fn path_for(&self, frame: u32) -> PathBuf {
        self.directory.join(self.file_name(frame))
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
