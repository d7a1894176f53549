// ---------------------------------------------------------------------------
// Summary statistics over a value series
// ---------------------------------------------------------------------------

/// Display labels, in report order.
pub const STAT_LABELS: [&str; 4] = ["Moyenne", "Min", "Max", "Médiane"];

/// Mean, extrema and median of one value series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Statistics {
    /// Compute all four statistics; `None` for an empty series.
    pub fn from_series(values: &[f64]) -> Option<Self> {
        Some(Statistics {
            mean: mean(values)?,
            min: min(values)?,
            max: max(values)?,
            median: median(values)?,
        })
    }

    /// `(label, value)` pairs in the fixed display order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (STAT_LABELS[0], self.mean),
            (STAT_LABELS[1], self.min),
            (STAT_LABELS[2], self.max),
            (STAT_LABELS[3], self.median),
        ]
    }

    /// One `Label: value` line per statistic, two decimals.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|(label, value)| format!("{label}: {value:.2}"))
            .collect()
    }
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// Middle value of the sorted data, or the mean of the two middle values
/// for an even length.
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}
