//! The per-line, per-pixel deep-sample count grid.
//!
//! Mirrors the cumulative-offset caching strategy of the sibling fork's `DeepSamples` type:
//! cumulative sums are computed once at construction so that `cum_samples` is O(1) per query
//! instead of being re-summed on every planner or traversal step.

use crate::error::{Error, Result};

/// `S[line][pixel] >= 1`, the deep sample multiplicity at each pixel of a
/// `y_res` lines by `x_res` pixels region. For non-deep data every entry is 1.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SampleTable {
    x_res: usize,
    y_res: usize,
    samples: Vec<Vec<u32>>,

    /// `line_totals[line] = sum of samples[line]`.
    line_totals: Vec<u64>,

    /// `cum[line] = sum of line_totals[0..line]`, length `y_res + 1`,
    /// with `cum[y_res]` the grand total.
    cum: Vec<u64>,
}

impl SampleTable {
    /// Build a sample table from a raw `y_res x x_res` grid.
    /// Fails with `ShapeMismatch` if the grid's shape does not match `x_res`/`y_res`,
    /// or if any entry is zero.
    pub fn new(samples: Vec<Vec<u32>>, x_res: usize, y_res: usize) -> Result<Self> {
        if samples.len() != y_res {
            return Err(Error::shape_mismatch(format!(
                "sample table has {} lines, expected {}", samples.len(), y_res
            )));
        }

        for (line, row) in samples.iter().enumerate() {
            if row.len() != x_res {
                return Err(Error::shape_mismatch(format!(
                    "sample table line {} has {} pixels, expected {}", line, row.len(), x_res
                )));
            }

            if let Some(pixel) = row.iter().position(|&count| count == 0) {
                return Err(Error::shape_mismatch(format!(
                    "sample table line {} pixel {} has zero samples", line, pixel
                )));
            }
        }

        let line_totals: Vec<u64> = samples.iter()
            .map(|row| row.iter().map(|&count| count as u64).sum())
            .collect();

        let mut cum = Vec::with_capacity(y_res + 1);
        cum.push(0);
        for &total in &line_totals {
            cum.push(cum.last().copied().unwrap_or(0) + total);
        }

        Ok(Self { x_res, y_res, samples, line_totals, cum })
    }

    /// Build a sample table for flat (non-deep) data: every pixel carries exactly one sample.
    pub fn flat(x_res: usize, y_res: usize) -> Self {
        Self::new(vec![vec![1; x_res]; y_res], x_res, y_res)
            .expect("flat sample table is always well-shaped")
    }

    pub fn x_res(&self) -> usize {
        self.x_res
    }

    pub fn y_res(&self) -> usize {
        self.y_res
    }

    /// Number of samples at a specific (line, pixel).
    #[inline]
    pub fn pixel_samples(&self, line: usize, pixel: usize) -> u32 {
        self.samples[line][pixel]
    }

    /// Total samples on a line, across all pixels.
    #[inline]
    pub fn line_samples(&self, line: usize) -> u64 {
        self.line_totals[line]
    }

    /// Cumulative sample count for lines `[0, line)`. `cum_samples(y_res)` is the grand total.
    #[inline]
    pub fn cum_samples(&self, line: usize) -> u64 {
        self.cum[line]
    }

    /// The grand total of samples across the whole region.
    #[inline]
    pub fn total_samples(&self) -> u64 {
        self.cum[self.y_res]
    }
}
