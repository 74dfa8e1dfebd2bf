//! Render knobs: output resolution and the label de-collision policy.
use serde::{Deserialize, Serialize};

/// Resolution the on-screen preview is drawn at.
pub const PREVIEW_DPI: u32 = 100;
/// Resolution of the downloadable PNG.
pub const EXPORT_DPI: u32 = 300;
/// Accepted resolutions; 1200 DPI is already a 5400 px square.
pub const DPI_RANGE: std::ops::RangeInclusive<u32> = 1..=1200;

/// What the label nudge is keyed on.
///
/// The two keys agree while labels are contiguous (`F1, F2, …`). They differ
/// once rejected or skipped rows leave gaps in the valid-point sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOffsetPolicy {
    /// 1-based position of the point among the valid points.
    #[default]
    LoopIndex,
    /// Number parsed from the label after its `F` prefix.
    LabelSuffix,
}

impl LabelOffsetPolicy {
    /// Offset `(ox, oy)` in cm from the marker to the label anchor.
    pub fn offset(self, ordinal: usize, label: &str) -> (f64, f64) {
        let key = match self {
            LabelOffsetPolicy::LoopIndex => ordinal,
            LabelOffsetPolicy::LabelSuffix => label
                .get(1..)
                .and_then(|s| s.parse().ok())
                .unwrap_or(ordinal),
        };
        let ox = if key % 2 == 0 { 8.0 } else { -12.0 };
        let oy = if key % 3 == 0 { 8.0 } else { -10.0 };
        (ox, oy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub dpi: u32,
    pub label_offsets: LabelOffsetPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::preview()
    }
}

impl RenderOptions {
    pub fn preview() -> Self {
        Self {
            dpi: PREVIEW_DPI,
            label_offsets: LabelOffsetPolicy::default(),
        }
    }

    pub fn export() -> Self {
        Self {
            dpi: EXPORT_DPI,
            ..Self::preview()
        }
    }

    /// Set the resolution, clamped to [`DPI_RANGE`].
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.clamp(*DPI_RANGE.start(), *DPI_RANGE.end());
        self
    }

    pub fn with_label_offsets(mut self, policy: LabelOffsetPolicy) -> Self {
        self.label_offsets = policy;
        self
    }

    /// Pixels per cm (and per layout unit) at this resolution.
    pub fn pixel_scale(&self) -> f64 {
        self.dpi.max(1) as f64 / PREVIEW_DPI as f64
    }
}
