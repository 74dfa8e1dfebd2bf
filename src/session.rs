//! Interactive session state.
//!
//! Rows carry a stable [`MeasurementId`]; the `F1, F2, …` labels are derived
//! from row position whenever they are displayed or solved, so deleting a row
//! renumbers the rows below it without changing their identity.
use crate::image::io::PngExport;
use crate::plotter::{PlotOutcome, Plotter};
use crate::types::{label_for, IntersectionPoint, Measurement};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SECTION: &str = "Section 8 Square 42";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MeasurementId(u64);

impl fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for MeasurementId {
    type Err = String;

    /// Parses the displayed form, `#7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('#')
            .and_then(|n| n.parse().ok())
            .map(MeasurementId)
            .ok_or_else(|| format!("Invalid id `{s}`; expected a form like #7"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub id: MeasurementId,
    pub measurement: Measurement,
}

/// Points and section of the most recent plot, kept for export.
#[derive(Clone, Debug, PartialEq)]
pub struct LastPlot {
    pub section: String,
    pub points: Vec<IntersectionPoint>,
}

#[derive(Clone, Debug)]
pub struct Session {
    section: String,
    rows: Vec<Row>,
    next_id: u64,
    last_plot: Option<LastPlot>,
}

impl Default for Session {
    /// Fresh session: default section and a single `(0.0, 0.0)` row.
    fn default() -> Self {
        let mut s = Self::empty(DEFAULT_SECTION);
        s.add_row(Measurement::from_cm(0.0, 0.0));
        s
    }
}

impl Session {
    pub fn empty(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            rows: Vec::new(),
            next_id: 1,
            last_plot: None,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn set_section(&mut self, section: impl Into<String>) {
        self.section = section.into();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last_plot(&self) -> Option<&LastPlot> {
        self.last_plot.as_ref()
    }

    pub fn add_row(&mut self, measurement: Measurement) -> MeasurementId {
        let id = MeasurementId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, measurement });
        id
    }

    /// Remove the row shown as `F{row}`; rows below shift up one label.
    pub fn delete_row(&mut self, row: usize) -> Result<MeasurementId, String> {
        let idx = self.index_of_row(row)?;
        Ok(self.rows.remove(idx).id)
    }

    /// Remove the row with `id`, returning the label it had.
    pub fn delete_by_id(&mut self, id: MeasurementId) -> Result<String, String> {
        let idx = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| format!("No measurement with id {id}"))?;
        self.rows.remove(idx);
        Ok(label_for(idx))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn set_row(&mut self, row: usize, measurement: Measurement) -> Result<(), String> {
        let idx = self.index_of_row(row)?;
        self.rows[idx].measurement = measurement;
        Ok(())
    }

    pub fn set_west(&mut self, row: usize, value: impl Into<String>) -> Result<(), String> {
        let idx = self.index_of_row(row)?;
        self.rows[idx].measurement.west = Some(value.into());
        Ok(())
    }

    pub fn set_east(&mut self, row: usize, value: impl Into<String>) -> Result<(), String> {
        let idx = self.index_of_row(row)?;
        self.rows[idx].measurement.east = Some(value.into());
        Ok(())
    }

    /// Current display label of `id`, if the row still exists.
    pub fn label_of(&self, id: MeasurementId) -> Option<String> {
        self.rows.iter().position(|r| r.id == id).map(label_for)
    }

    /// `(label, row)` pairs in display order.
    pub fn labelled_rows(&self) -> impl Iterator<Item = (String, &Row)> {
        self.rows.iter().enumerate().map(|(i, r)| (label_for(i), r))
    }

    pub fn measurements(&self) -> Vec<Measurement> {
        self.rows.iter().map(|r| r.measurement.clone()).collect()
    }

    /// Solve and render the current rows; remembers the result for export.
    pub fn plot(&mut self, plotter: &Plotter) -> PlotOutcome {
        let outcome = plotter.plot(&self.measurements(), &self.section);
        self.last_plot = Some(LastPlot {
            section: self.section.clone(),
            points: outcome.points(),
        });
        outcome
    }

    /// PNG of the last plot at export resolution.
    pub fn export(&self, plotter: &Plotter) -> Result<PngExport, String> {
        let last = self
            .last_plot
            .as_ref()
            .ok_or_else(|| "Nothing to export yet; run `plot` first".to_string())?;
        plotter.export(&last.points, &last.section)
    }

    fn index_of_row(&self, row: usize) -> Result<usize, String> {
        if row == 0 || row > self.rows.len() {
            return Err(format!(
                "Row F{row} does not exist (have {} rows)",
                self.rows.len()
            ));
        }
        Ok(row - 1)
    }
}
