use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one plot stage (solve, render, encode).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings for a single plot action.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `f`, record its duration under `label` and return its value.
    pub fn time<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = f();
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms,
        });
        self.total_ms += elapsed_ms;
        out
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_accumulate_into_the_total() {
        let mut t = TimingBreakdown::default();
        let v = t.time("solve", || 2 + 2);
        t.time("render", || ());
        assert_eq!(v, 4);
        assert_eq!(t.stages.len(), 2);
        assert!(t.get("solve").is_some());
        assert!(t.get("export").is_none());
        let sum: f64 = t.stages.iter().map(|s| s.elapsed_ms).sum();
        assert!((t.total_ms - sum).abs() < 1e-9);
    }
}
