use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::BatchReport;
use serde_json::{Value, json};

/// Serialize a batch report as `{ strips, skipped, manifestAdded, meta }`.
/// Each strip carries its cell size so engines can slice it back into frames.
pub fn to_json_report(report: &BatchReport) -> Value {
    let strips: Vec<Value> = report
        .strips
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "file": s.file_name,
                "frames": s.frame_count,
                "frameSize": {"w": s.frame_width, "h": s.frame_height},
                "size": {"w": s.width, "h": s.height},
            })
        })
        .collect();
    json!({
        "strips": strips,
        "skipped": report.skipped,
        "manifestAdded": report.manifest_added,
        "meta": {
            "app": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "totalFrames": report.total_frames,
        },
    })
}

/// Writes [`to_json_report`] as pretty JSON to `path`.
pub fn write_json_report(path: &Path, report: &BatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(&to_json_report(report))?;
    fs::write(path, json)?;
    Ok(())
}
