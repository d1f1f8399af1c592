//! Append-only updates to a MonoGame `Content.mgcb` build manifest.
//!
//! The manifest is never parsed: an entry counts as present when its
//! `#begin <file>` marker occurs anywhere in the text. Existing content,
//! including hand-edited or unrelated blocks, is preserved byte for byte.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, StripError};

pub const IMPORTER: &str = "TextureImporter";
pub const PROCESSOR: &str = "TextureProcessor";

/// Fixed texture processor parameters written for every strip.
pub const PROCESSOR_PARAMS: &[(&str, &str)] = &[
    ("ColorKeyColor", "255,0,255,255"),
    ("ColorKeyEnabled", "True"),
    ("GenerateMipmaps", "False"),
    ("PremultiplyAlpha", "True"),
    ("ResizeToPowerOfTwo", "False"),
    ("MakeSquare", "False"),
    ("TextureFormat", "Color"),
];

/// Marker identifying the entry for `file_name`.
pub fn entry_marker(file_name: &str) -> String {
    format!("#begin {file_name}")
}

/// Full entry block for `file_name`, starting with a blank line.
pub fn build_entry(file_name: &str) -> String {
    let mut s = String::new();
    s.push('\n');
    s.push_str(&entry_marker(file_name));
    s.push('\n');
    s.push_str(&format!("/importer:{IMPORTER}\n"));
    s.push_str(&format!("/processor:{PROCESSOR}\n"));
    for (k, v) in PROCESSOR_PARAMS {
        s.push_str(&format!("/processorParam:{k}={v}\n"));
    }
    s.push_str(&format!("/build:{file_name}\n"));
    s
}

/// Appends entries for names whose marker is missing from `content`.
///
/// Names are processed in sorted order, duplicates once. Returns the names
/// actually appended.
pub fn append_entries<I, S>(content: &mut String, file_names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sorted: BTreeSet<String> = file_names
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    let mut added = Vec::new();
    for name in sorted {
        if content.contains(&entry_marker(&name)) {
            debug!(file = %name, "manifest entry already present");
            continue;
        }
        content.push_str(&build_entry(&name));
        added.push(name);
    }
    added
}

/// Reads the manifest at `path`, appends missing entries and rewrites it once.
///
/// The file is left untouched when nothing was added. Returns the added names.
pub fn update_manifest<I, S>(path: &Path, file_names: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = fs::read_to_string(path).map_err(|source| StripError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let added = append_entries(&mut content, file_names);
    if !added.is_empty() {
        fs::write(path, &content).map_err(|source| StripError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!(?path, added = added.len(), "manifest updated");
    }
    Ok(added)
}
