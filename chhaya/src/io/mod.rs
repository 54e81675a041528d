//! Frame export.
//!
//! - **PGM (P2)**: plain-text grayscale images, one per frame
//! - **Frame naming**: zero-padded frame index plus a fixed extension
//!
//! ```rust,ignore
//! use chhaya::io::{FrameNaming, save_pgm};
//!
//! let naming = FrameNaming::default();
//! save_pgm(&rendered.raster, &naming.path_for(rendered.frame))?;
//! ```

pub mod naming;
pub mod pgm;

pub use naming::FrameNaming;
pub use pgm::{PgmError, load_pgm, read_pgm, save_pgm, write_pgm};
