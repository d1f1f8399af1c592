use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::collect::{collect_frames, discover_animations};
use crate::config::BatchConfig;
use crate::error::{Result, StripError};
use crate::manifest::{append_entries, update_manifest};
use crate::model::{BatchEvent, BatchReport};
use crate::strip::build_strip;

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
/// Builds one strip per animation directory under `input`, writing them to `output`.
///
/// Notes:
/// - Animations are processed sequentially in name order; `observer` sees each
///   outcome as soon as that animation is finished.
/// - An animation without frames is skipped, not an error.
/// - The first decode or write failure aborts the run. Strips already written
///   stay on disk, and the manifest is not touched.
/// - The manifest (if configured) is read and rewritten once, after all strips,
///   and only when at least one strip was produced.
/// - `output` must already exist.
pub fn run_batch<F>(
    input: &Path,
    output: &Path,
    cfg: &BatchConfig,
    mut observer: F,
) -> Result<BatchReport>
where
    F: FnMut(&BatchEvent),
{
    cfg.validate()?;
    if !input.is_dir() {
        return Err(StripError::MissingInputDir(input.to_path_buf()));
    }
    let exclude = cfg.exclude_set()?;
    let ext = cfg.normalized_extension();

    let mut report = BatchReport::default();
    for anim in discover_animations(input)? {
        if !cfg.selects(&anim.name, exclude.as_ref()) {
            debug!(animation = %anim.name, "filtered out");
            continue;
        }

        let frames = collect_frames(&anim.path, &ext)?;
        if frames.is_empty() {
            info!(animation = %anim.name, "no frames found, skipped");
            report.skipped.push(anim.name.clone());
            observer(&BatchEvent::Skipped(anim.name));
            continue;
        }

        let strip = build_strip(&anim.name, &frames)?;
        let file_name = cfg.output_name(&anim.name);
        if !cfg.dry_run {
            let out_path = output.join(&file_name);
            strip.save(&out_path)?;
            info!(?out_path, w = strip.width(), h = strip.height(), "wrote strip");
        }
        let record = strip.record(file_name);
        report.total_frames += record.frame_count;
        observer(&BatchEvent::Built(record.clone()));
        report.strips.push(record);
    }

    if let Some(manifest) = &cfg.manifest {
        if !report.strips.is_empty() {
            let added = if cfg.dry_run {
                preview_manifest(manifest, &report.file_names())?
            } else {
                update_manifest(manifest, report.file_names())?
            };
            report.manifest_added = Some(added);
        }
    }
    Ok(report)
}

/// Same as [`run_batch`] without an observer.
pub fn run_batch_quiet(input: &Path, output: &Path, cfg: &BatchConfig) -> Result<BatchReport> {
    run_batch(input, output, cfg, |_| {})
}

// dry run: compute what would be appended, write nothing
fn preview_manifest(path: &Path, file_names: &[String]) -> Result<Vec<String>> {
    let mut content = fs::read_to_string(path).map_err(|source| StripError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(append_entries(&mut content, file_names))
}
