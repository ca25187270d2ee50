use super::DerivedColumns;
use crate::dataset::MatchTable;
use serde::Serialize;

/// Bin count used by the margin histogram.
pub const HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarginPair {
    pub runs: u32,
    pub wickets: u32,
}

/// Runs and wickets margin for every row, missing values as zero.
pub fn margin_pairs(table: &MatchTable) -> Vec<MarginPair> {
    table
        .records()
        .iter()
        .map(|record| MarginPair {
            runs: record.runs_margin(),
            wickets: record.wickets_margin(),
        })
        .collect()
}

pub fn max_margins(pairs: &[MarginPair]) -> (u32, u32) {
    pairs.iter().fold((0, 0), |(runs, wickets), pair| {
        (runs.max(pair.runs), wickets.max(pair.wickets))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Strictly positive total margins, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarginDistribution {
    pub margins: Vec<u32>,
}

impl MarginDistribution {
    pub fn from_derived(derived: &DerivedColumns) -> Self {
        Self {
            margins: derived
                .total_margin
                .iter()
                .copied()
                .filter(|margin| *margin > 0)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.margins.is_empty()
    }

    pub fn mean(&self) -> f64 {
        if self.margins.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.margins.iter().map(|m| u64::from(*m)).sum();
        sum as f64 / self.margins.len() as f64
    }

    pub fn median(&self) -> f64 {
        let mut sorted = self.margins.clone();
        sorted.sort_unstable();
        let n = sorted.len();
        match n {
            0 => 0.0,
            _ if n % 2 == 0 => (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0,
            _ => f64::from(sorted[n / 2]),
        }
    }

    pub fn max(&self) -> u32 {
        self.margins.iter().copied().max().unwrap_or(0)
    }

    /// Equal-width bins over `[min, max]`; the last bin is closed on the right.
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        let (Some(min), Some(max)) = (
            self.margins.iter().copied().min(),
            self.margins.iter().copied().max(),
        ) else {
            return Vec::new();
        };
        if bins == 0 {
            return Vec::new();
        }

        let (lower, upper) = if min == max {
            (f64::from(min) - 0.5, f64::from(max) + 0.5)
        } else {
            (f64::from(min), f64::from(max))
        };
        let width = (upper - lower) / bins as f64;

        let mut histogram: Vec<HistogramBin> = (0..bins)
            .map(|index| HistogramBin {
                lower: lower + width * index as f64,
                upper: lower + width * (index + 1) as f64,
                count: 0,
            })
            .collect();

        for margin in &self.margins {
            let offset = (f64::from(*margin) - lower) / width;
            let index = (offset.floor() as usize).min(bins - 1);
            histogram[index].count += 1;
        }

        histogram
    }
}
