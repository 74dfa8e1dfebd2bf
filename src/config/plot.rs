use crate::plotter::PlotParams;
use crate::render::{LabelOffsetPolicy, RenderOptions, DPI_RANGE, EXPORT_DPI, PREVIEW_DPI};
use crate::session::{Session, DEFAULT_SECTION};
use crate::types::{format_cm, Measurement, BASELINE_CM};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Batch run: one section, its measurement rows and where to write results.
#[derive(Debug, Deserialize)]
pub struct PlotToolConfig {
    #[serde(default = "default_section")]
    pub section: String,
    /// `[west, east]` pairs; each entry may be a number, a string or null.
    #[serde(default)]
    pub measurements: Vec<[Option<DistanceField>; 2]>,
    #[serde(default = "default_baseline")]
    pub baseline_cm: f64,
    #[serde(default)]
    pub label_offsets: LabelOffsetPolicy,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: PlotOutputConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DistanceField {
    Number(f64),
    Text(String),
}

impl DistanceField {
    fn into_raw(self) -> String {
        match self {
            DistanceField::Number(v) => format_cm(v),
            DistanceField::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Resolution of the preview raster.
    pub dpi: u32,
    /// Resolution of the exported PNG.
    pub export_dpi: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: PREVIEW_DPI,
            export_dpi: EXPORT_DPI,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlotOutputConfig {
    pub png: PathBuf,
    pub report_json: Option<PathBuf>,
}

impl Default for PlotOutputConfig {
    fn default() -> Self {
        Self {
            png: PathBuf::from(crate::image::io::EXPORT_FILE_NAME),
            report_json: None,
        }
    }
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

fn default_baseline() -> f64 {
    BASELINE_CM
}

impl PlotToolConfig {
    pub fn plot_params(&self) -> PlotParams {
        let preview = RenderOptions::preview()
            .with_dpi(self.render.dpi)
            .with_label_offsets(self.label_offsets);
        let export = preview.with_dpi(self.render.export_dpi);
        PlotParams {
            baseline_cm: self.baseline_cm,
            preview,
            export,
        }
    }

    /// Session seeded with the configured section and rows.
    pub fn to_session(&self) -> Session {
        let mut session = Session::empty(self.section.clone());
        for [west, east] in self.measurements.iter().cloned() {
            session.add_row(Measurement {
                west: west.map(DistanceField::into_raw),
                east: east.map(DistanceField::into_raw),
            });
        }
        session
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.baseline_cm.is_finite() && self.baseline_cm > 0.0) {
            return Err(format!(
                "baseline_cm must be a positive number, got {}",
                self.baseline_cm
            ));
        }
        for (key, dpi) in [
            ("render.dpi", self.render.dpi),
            ("render.export_dpi", self.render.export_dpi),
        ] {
            if !DPI_RANGE.contains(&dpi) {
                return Err(format!(
                    "{key} must be in {}..={}, got {dpi}",
                    DPI_RANGE.start(),
                    DPI_RANGE.end()
                ));
            }
        }
        Ok(())
    }
}

pub fn parse_config(text: &str) -> Result<PlotToolConfig, String> {
    let config: PlotToolConfig =
        serde_json::from_str(text).map_err(|e| format!("Failed to parse config: {e}"))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<PlotToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg = parse_config("{}").expect("empty config is valid");
        assert_eq!(cfg.section, DEFAULT_SECTION);
        assert_eq!(cfg.baseline_cm, 350.0);
        assert_eq!(cfg.label_offsets, LabelOffsetPolicy::LoopIndex);
        assert_eq!(cfg.output.png, PathBuf::from("intersection_plot.png"));
        let params = cfg.plot_params();
        assert_eq!((params.preview.dpi, params.export.dpi), (100, 300));
        assert!(cfg.to_session().is_empty());
    }

    #[test]
    fn mixed_measurement_fields_become_raw_text() {
        let cfg = parse_config(
            r#"{
                "section": "Section 3 Square 11",
                "measurements": [[250, 250], ["100", 100.5], [null, "abc"]],
                "label_offsets": "label_suffix",
                "render": { "dpi": 200 },
                "output": { "png": "out/plot.png", "report_json": "out/report.json" }
            }"#,
        )
        .expect("valid config");
        let session = cfg.to_session();
        assert_eq!(session.section(), "Section 3 Square 11");
        assert_eq!(
            session.measurements(),
            [
                Measurement::new("250.0", "250.0"),
                Measurement::new("100", "100.5"),
                Measurement {
                    west: None,
                    east: Some("abc".into())
                },
            ]
        );
        let params = cfg.plot_params();
        assert_eq!(params.preview.dpi, 200);
        assert_eq!(params.export.dpi, 300);
        assert_eq!(params.export.label_offsets, LabelOffsetPolicy::LabelSuffix);
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn rejects_non_positive_baseline() {
        assert!(parse_config(r#"{ "baseline_cm": 0 }"#).is_err());
        assert!(parse_config(r#"{ "measurements": 5 }"#).is_err());
    }

    #[test]
    fn rejects_out_of_range_dpi() {
        let err = parse_config(
            r#"{ "measurements": [[250, 250]], "render": { "dpi": 4000000000 } }"#,
        )
        .expect_err("huge dpi");
        assert_eq!(err, "render.dpi must be in 1..=1200, got 4000000000");
        let err = parse_config(r#"{ "render": { "export_dpi": 0 } }"#).expect_err("zero dpi");
        assert_eq!(err, "render.export_dpi must be in 1..=1200, got 0");
        assert!(parse_config(r#"{ "render": { "dpi": 1200, "export_dpi": 1 } }"#).is_ok());
    }
}
