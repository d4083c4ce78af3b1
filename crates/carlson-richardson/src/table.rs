//! Packed storage for the triangular extrapolation table.

/// Lower-triangular table of extrapolated estimates, indexed by
/// `(i, k)` with `k ≤ i`.
///
/// Entry `(i, 0)` holds the raw arithmetic mean after step `i`; entry
/// `(i, k)` refines `(i, k-1)` against `(i-1, k-1)`. Rows are stored
/// packed in one flat row-major vector, `(rows)(rows+1)/2` entries
/// total, rather than as nested per-row allocations. Entries are only
/// ever appended, in increasing `i` and then increasing `k`, so every
/// entry exists before anything that depends on it is computed.
#[derive(Clone, Debug)]
pub struct ExtrapolationTable {
    entries: Vec<f64>,
    rows: usize,
}

impl ExtrapolationTable {
    /// Creates an empty table with capacity reserved for `rows` rows.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            entries: Vec::with_capacity(rows * (rows + 1) / 2),
            rows: 0,
        }
    }

    /// Number of completed rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Entry `(i, k)` of a completed row, `k ≤ i < rows`.
    pub fn entry(&self, i: usize, k: usize) -> f64 {
        debug_assert!(i < self.rows && k <= i);
        self.entries[i * (i + 1) / 2 + k]
    }

    /// Appends row `i`: stores `raw` at `(i, 0)`, then fills `(i, k)`
    /// for `k = 1..=i` from the weighted difference with the row
    /// above,
    ///
    /// d(i,k) = (d(i,k-1) - 4⁻ᵏ·d(i-1,k-1)) / (1 - 4⁻ᵏ)
    ///
    /// The weights are exact powers of two, so the elimination itself
    /// introduces no rounding; the accuracy limit at large `k` is the
    /// cancellation in the numerator's subtraction.
    pub fn push_row(&mut self, raw: f64) {
        let i = self.rows;
        self.entries.push(raw);
        for k in 1..=i {
            let weight = 0.25_f64.powi(k as i32);
            let prev = self.entries[i * (i + 1) / 2 + (k - 1)];
            let above = self.entries[(i - 1) * i / 2 + (k - 1)];
            self.entries.push((prev - weight * above) / (1.0 - weight));
        }
        self.rows += 1;
    }

    /// Diagonal entries `(i, i)` of every completed row, in row order.
    ///
    /// Row `i` depends only on rows below it, so the diagonal of one
    /// table is the family of most-refined estimates for every level
    /// up to `rows - 1`.
    pub fn diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(|i| self.entry(i, i))
    }

    /// The most-refined estimate: the last row's last entry, or
    /// `None` for an empty table.
    pub fn corner(&self) -> Option<f64> {
        self.rows.checked_sub(1).map(|i| self.entry(i, i))
    }
}
