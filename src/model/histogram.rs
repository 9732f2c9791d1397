/// Final-position counts for one Galton board run.
///
/// Bin `i` counts the balls that came to rest at displacement `i - num_cols`,
/// so the bins cover `[-num_cols, +num_cols]` from left to right. A histogram
/// is filled by the simulation runner and read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    num_cols: u32,
    bins: Vec<u64>,
}

impl Histogram {
    /// An all-zero histogram with `2 * num_cols + 1` bins.
    pub fn new(num_cols: u32) -> Self {
        let len = 2 * num_cols as usize + 1;
        Self {
            num_cols,
            bins: vec![0; len],
        }
    }

    /// Count one ball landing in `bin`.
    pub(crate) fn record(&mut self, bin: usize) {
        self.bins[bin] += 1;
    }

    pub fn num_cols(&self) -> u32 {
        self.num_cols
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    pub fn get(&self, bin: usize) -> Option<u64> {
        self.bins.get(bin).copied()
    }

    /// Largest count in any bin; 0 for a histogram that saw no balls.
    pub fn max_frequency(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Total number of balls recorded.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Lowest bin index holding the maximum count.
    pub fn peak_bin(&self) -> usize {
        let max = self.max_frequency();
        self.bins.iter().position(|&c| c == max).unwrap_or(0)
    }

    /// Signed displacement from the drop point represented by `bin`.
    pub fn displacement(&self, bin: usize) -> i64 {
        bin as i64 - i64::from(self.num_cols)
    }

    /// Mean final displacement, or `None` if no balls were recorded.
    pub fn mean_displacement(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(bin, &count)| self.displacement(bin) as f64 * count as f64)
            .sum();
        Some(weighted / total as f64)
    }
}
