use intersection_plotter::{Measurement, BASELINE_CM};

/// Tape readings a surveyor would take for a find at `(x, y)` cm.
pub fn tape_readings(x: f64, y: f64) -> (f64, f64) {
    let west = (x * x + y * y).sqrt();
    let east = ((x - BASELINE_CM).powi(2) + y * y).sqrt();
    (west, east)
}

/// Measurement rows for a set of known find positions.
pub fn survey_rows(finds: &[(f64, f64)]) -> Vec<Measurement> {
    finds
        .iter()
        .map(|&(x, y)| {
            let (w, e) = tape_readings(x, y);
            Measurement::from_cm(w, e)
        })
        .collect()
}
