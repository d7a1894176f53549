// ---------------------------------------------------------------------------
// Histogram – the renderable distribution of a value series
// ---------------------------------------------------------------------------

/// Fixed number of bins used for the distribution plot.
pub const HISTOGRAM_BINS: usize = 20;

/// Equal-width bin edges and counts, plus the labels to draw them with.
/// Independent of any rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `counts.len() + 1` increasing edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// One bar of the histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl Histogram {
    /// Bin the finite values of `values` into `bins` equal-width bins over
    /// `[min, max]`.  Every bin is half-open except the last, which also
    /// holds `max`.  A constant series is centred in `[v - 0.5, v + 0.5]`.
    pub fn from_values(values: &[f64], bins: usize, column: &str) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let (lo, hi) = match (
            finite.iter().copied().reduce(f64::min),
            finite.iter().copied().reduce(f64::max),
        ) {
            (Some(lo), Some(hi)) if lo < hi => (lo, hi),
            (Some(v), Some(_)) => (v - 0.5, v + 0.5),
            _ => (-0.5, 0.5),
        };

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);

        let mut counts = vec![0usize; bins];
        for v in finite {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            // Correct float drift so values sit on the side of the edge they belong to.
            let idx = if v < edges[idx] {
                idx.saturating_sub(1)
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx + 1
            } else {
                idx
            };
            counts[idx] += 1;
        }

        Histogram {
            title: format!("Histogramme de {column}"),
            x_label: column.to_string(),
            y_label: "Fréquence".to_string(),
            edges,
            counts,
        }
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| Bin {
                start: edge[0],
                end: edge[1],
                count,
            })
    }

    /// Number of values that landed in a bin.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
