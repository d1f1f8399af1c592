use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;
use crate::natural::{NaturalKey, natural_key};

/// A frame image file inside an animation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    pub path: PathBuf,
    /// File name (no directory part); the natural key is derived from it.
    pub name: String,
    pub key: NaturalKey,
}

/// An immediate subdirectory of the input root; one strip per animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDir {
    /// Directory basename, used as the animation name.
    pub name: String,
    pub path: PathBuf,
}

/// Returns true if `name` ends in `.<ext>` (ASCII case-insensitive).
pub fn has_extension(name: &str, ext: &str) -> bool {
    let ext = ext.trim_start_matches('.');
    matches!(name.rsplit_once('.'), Some((_, tail)) if tail.eq_ignore_ascii_case(ext))
}

/// True for a walk error on a listed entry that is a symlink whose target is gone.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() >= 1
        && err
            .path()
            .and_then(|p| fs::symlink_metadata(p).ok())
            .is_some_and(|m| m.file_type().is_symlink())
}

/// Lists the frame files of one animation directory in natural order.
///
/// Only regular files whose name ends in `.<ext>` count; everything else
/// (other formats, subdirectories, dangling links to non-frame names) is
/// ignored; a dangling link with a frame name is an error. An empty result is the normal
/// "nothing to build" signal, not an error.
pub fn collect_frames(dir: &Path, ext: &str) -> Result<Vec<FrameFile>> {
    let mut frames = Vec::new();
    // Sorted listing gives equal natural keys a lexicographic tiebreak.
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if is_dangling_link(&err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                let is_frame = path
                    .file_name()
                    .is_some_and(|n| has_extension(&n.to_string_lossy(), ext));
                if is_frame {
                    // a missing frame would shift every later cell
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("dangling frame link {}", path.display()),
                    )
                    .into());
                }
                debug!(?path, "skip dangling link");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        // Lossy names still sort; the real path is kept for decoding.
        let name = entry.file_name().to_string_lossy().into_owned();
        if !has_extension(&name, ext) {
            continue;
        }
        frames.push(FrameFile {
            path: entry.path().to_path_buf(),
            key: natural_key(&name),
            name,
        });
    }
    // stable: ties keep listing order
    frames.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(frames)
}

/// Lists candidate animation directories under `root`, by name.
pub fn discover_animations(root: &Path) -> Result<Vec<AnimationDir>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if is_dangling_link(&err) => {
                debug!(path = ?err.path(), "skip dangling link");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        dirs.push(AnimationDir {
            name,
            path: entry.path().to_path_buf(),
        });
    }
    Ok(dirs)
}
