use serde::{Deserialize, Serialize};

/// A strip written for one animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StripRecord {
    /// Animation name (source directory basename).
    pub name: String,
    /// Output file name, `<prefix><name>.<ext>`.
    pub file_name: String,
    pub frame_count: usize,
    /// Cell size; the strip is `frame_width * frame_count` wide.
    pub frame_width: u32,
    pub frame_height: u32,
    /// Strip dimensions.
    pub width: u32,
    pub height: u32,
}

/// Per-animation outcome, reported as soon as the animation is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// No qualifying frame files; nothing written.
    Skipped(String),
    Built(StripRecord),
}

/// Result of a whole batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub strips: Vec<StripRecord>,
    /// Animations with no frames, in processing order.
    pub skipped: Vec<String>,
    /// Sum of frame counts over all strips.
    pub total_frames: usize,
    /// Entries appended to the manifest; `None` when no manifest update ran.
    pub manifest_added: Option<Vec<String>>,
}

/// Aggregate numbers about a batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BatchStats {
    pub num_strips: usize,
    pub num_skipped: usize,
    pub total_frames: usize,
    /// Sum of strip areas (width * height).
    pub total_area: u64,
    /// Largest strip dimensions.
    pub max_strip_width: u32,
    pub max_strip_height: u32,
}

impl BatchReport {
    /// Output file names of every produced strip, in processing order.
    pub fn file_names(&self) -> Vec<String> {
        self.strips.iter().map(|s| s.file_name.clone()).collect()
    }

    /// Computes aggregate statistics for this report.
    pub fn stats(&self) -> BatchStats {
        let mut total_area = 0u64;
        let mut max_strip_width = 0u32;
        let mut max_strip_height = 0u32;
        for s in &self.strips {
            total_area += (s.width as u64) * (s.height as u64);
            max_strip_width = max_strip_width.max(s.width);
            max_strip_height = max_strip_height.max(s.height);
        }
        BatchStats {
            num_strips: self.strips.len(),
            num_skipped: self.skipped.len(),
            total_frames: self.total_frames,
            total_area,
            max_strip_width,
            max_strip_height,
        }
    }
}

impl BatchStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} strips ({} total frames), skipped {}, total area {} px²",
            self.num_strips, self.total_frames, self.num_skipped, self.total_area,
        )
    }
}
