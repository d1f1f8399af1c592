//! Core library for turning folders of numbered animation frames into horizontal sprite strips.
//!
//! - Collector: lists `*.png` frames of one animation folder in natural order (`f2` before `f10`)
//! - Compositor: pastes frames left to right into equal cells sized to the largest frame, top-left anchored
//! - Manifest: appends MonoGame `Content.mgcb` entries for new strips, never rewriting existing ones
//! - Batch: drives all three over an input root, one animation at a time
//!
//! Quick example:
//! ```ignore
//! use std::path::Path;
//! use strip_builder_core::prelude::*;
//! # fn main() -> anyhow::Result<()> {
//! let cfg = BatchConfig::builder().prefix("player_").build();
//! let report = run_batch(Path::new("Animations/player"), Path::new("Content"), &cfg, |ev| {
//!     if let BatchEvent::Built(s) = ev {
//!         println!("{} -> {}x{}", s.file_name, s.width, s.height);
//!     }
//! })?;
//! println!("{}", report.stats().summary());
//! # Ok(()) }
//! ```

pub mod batch;
pub mod collect;
pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod manifest;
pub mod model;
pub mod natural;
pub mod strip;

pub use batch::*;
pub use collect::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use strip::*;

/// Convenience prelude for common types and functions.
/// Importing `strip_builder_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::batch::{run_batch, run_batch_quiet};
    pub use crate::collect::{AnimationDir, FrameFile, collect_frames, discover_animations};
    pub use crate::config::{BatchConfig, BatchConfigBuilder, parse_only_list};
    pub use crate::error::{Result, StripError};
    pub use crate::manifest::{append_entries, build_entry, update_manifest};
    pub use crate::model::{BatchEvent, BatchReport, BatchStats, StripRecord};
    pub use crate::natural::{NaturalKey, natural_cmp, natural_key};
    pub use crate::strip::{Strip, build_strip, compose_strip};
}
