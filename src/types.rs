use serde::Serialize;
use std::fmt;

/// Distance between the west pivot (x=0) and the east pivot (x=350), in cm.
pub const BASELINE_CM: f64 = 350.0;

/// Side length of the survey square, in cm.
pub const SQUARE_SIDE_CM: f64 = 350.0;

/// Raw (west, east) distance pair as typed into a measurement row.
///
/// Values stay as text until the solver parses them so that partially filled
/// rows can live in the session without blocking a plot.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Measurement {
    pub west: Option<String>,
    pub east: Option<String>,
}

impl Measurement {
    pub fn new(west: impl Into<String>, east: impl Into<String>) -> Self {
        Self {
            west: Some(west.into()),
            east: Some(east.into()),
        }
    }

    pub fn from_cm(west: f64, east: f64) -> Self {
        Self::new(format_cm(west), format_cm(east))
    }
}

/// Located find, measured from the west pivot with north (+y) up.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntersectionPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    TooFarApart,
    OneInsideOther,
    NoRealIntersection,
}

impl RejectionReason {
    pub fn phrase(self) -> &'static str {
        match self {
            RejectionReason::TooFarApart => "too far apart",
            RejectionReason::OneInsideOther => "one circle inside another",
            RejectionReason::NoRealIntersection => "no real intersection",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RejectionRecord {
    pub label: String,
    pub west: f64,
    pub east: f64,
    pub reason: RejectionReason,
}

/// Measurement whose distances did not parse as finite numbers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkippedMeasurement {
    pub label: String,
}

/// Per-measurement result, one for every input in input order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MeasurementOutcome {
    Point(IntersectionPoint),
    Rejected(RejectionRecord),
    Skipped(SkippedMeasurement),
}

impl MeasurementOutcome {
    pub fn label(&self) -> &str {
        match self {
            MeasurementOutcome::Point(p) => &p.label,
            MeasurementOutcome::Rejected(r) => &r.label,
            MeasurementOutcome::Skipped(s) => &s.label,
        }
    }
}

/// Ordered solver output.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SolveOutput {
    pub outcomes: Vec<MeasurementOutcome>,
}

impl SolveOutput {
    pub fn valid_points(&self) -> impl Iterator<Item = &IntersectionPoint> {
        self.outcomes.iter().filter_map(|o| match o {
            MeasurementOutcome::Point(p) => Some(p),
            _ => None,
        })
    }

    pub fn rejections(&self) -> impl Iterator<Item = &RejectionRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            MeasurementOutcome::Rejected(r) => Some(r),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedMeasurement> {
        self.outcomes.iter().filter_map(|o| match o {
            MeasurementOutcome::Skipped(s) => Some(s),
            _ => None,
        })
    }

    pub fn points_vec(&self) -> Vec<IntersectionPoint> {
        self.valid_points().cloned().collect()
    }
}

/// Display label for the measurement at 0-based `index`.
pub fn label_for(index: usize) -> String {
    format!("F{}", index + 1)
}

/// Shortest round-trip form with a trailing `.0` on whole numbers.
///
/// Exponents carry a sign and at least two digits (`1e-05`, `1e+16`), the
/// way the field tool has always printed them.
pub fn format_cm(v: f64) -> String {
    let s = format!("{v:?}");
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        assert_eq!(label_for(0), "F1");
        assert_eq!(label_for(11), "F12");
    }

    #[test]
    fn distances_keep_float_form() {
        assert_eq!(format_cm(100.0), "100.0");
        assert_eq!(format_cm(12.5), "12.5");
        assert_eq!(format_cm(0.0), "0.0");
        assert_eq!(format_cm(0.0001), "0.0001");
    }

    #[test]
    fn exponents_are_signed_and_two_digits_wide() {
        assert_eq!(format_cm(1e-5), "1e-05");
        assert_eq!(format_cm(1.5e-7), "1.5e-07");
        assert_eq!(format_cm(1e16), "1e+16");
        assert_eq!(format_cm(-2.5e-120), "-2.5e-120");
        assert_eq!(format_cm(1.2e300), "1.2e+300");
    }

    #[test]
    fn reason_phrases_match_listing() {
        assert_eq!(RejectionReason::TooFarApart.to_string(), "too far apart");
        assert_eq!(
            RejectionReason::OneInsideOther.to_string(),
            "one circle inside another"
        );
        assert_eq!(
            RejectionReason::NoRealIntersection.to_string(),
            "no real intersection"
        );
    }
}
