//! Growable square boolean matrix.
//!
//! Each row is a [`FixedBitSet`] whose length equals the matrix side. Rows
//! and columns are only ever added; [`AdjacencyMatrix::clear_row`] zeroes a
//! row in place instead of removing it.

use std::fmt;

use fixedbitset::FixedBitSet;

/// Square 0/1 matrix with `side` rows of `side` bits each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    side: usize,
    rows: Vec<FixedBitSet>,
}

impl AdjacencyMatrix {
    /// Create a zeroed `side × side` matrix.
    #[must_use]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            rows: (0..side).map(|_| FixedBitSet::with_capacity(side)).collect(),
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Add `extra` rows and `extra` columns, all zero.
    pub fn grow(&mut self, extra: usize) {
        if extra == 0 {
            return;
        }
        self.side += extra;
        for row in &mut self.rows {
            row.grow(self.side);
        }
        let side = self.side;
        self.rows
            .extend((0..extra).map(|_| FixedBitSet::with_capacity(side)));
    }

    /// Read entry `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.check(row, col);
        self.rows[row].contains(col)
    }

    /// Write entry `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.check(row, col);
        self.rows[row].set(col, value);
    }

    /// Zero every entry of `row`. The row itself stays in place.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the matrix.
    pub fn clear_row(&mut self, row: usize) {
        self.rows[row].clear();
    }

    /// Borrow a row as a bitset.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the matrix.
    #[must_use]
    pub fn row(&self, row: usize) -> &FixedBitSet {
        &self.rows[row]
    }

    /// All rows in index order.
    #[must_use]
    pub fn rows(&self) -> &[FixedBitSet] {
        &self.rows
    }

    /// Total number of set entries.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones(..)).sum()
    }

    /// Return `true` if `m[i][j] == m[j][i]` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.ones().all(|j| self.rows[j].contains(i)))
    }

    fn check(&self, row: usize, col: usize) {
        assert!(
            row < self.side && col < self.side,
            "matrix index ({row}, {col}) out of bounds for side {}",
            self.side
        );
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.side).map(|c| c.to_string()).collect();
        write!(f, "  {}", header.join(" "))?;
        for (idx, row) in self.rows.iter().enumerate() {
            let cells: Vec<&str> = (0..self.side)
                .map(|c| if row.contains(c) { "1" } else { "0" })
                .collect();
            write!(f, "\n{idx} {}", cells.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matrix_is_zeroed() {
        let m = AdjacencyMatrix::new(4);
        assert_eq!(m.side(), 4);
        assert_eq!(m.count_ones(), 0);
        for r in 0..4 {
            for c in 0..4 {
                assert!(!m.get(r, c));
            }
        }
    }

    #[test]
    fn grow_preserves_entries() {
        let mut m = AdjacencyMatrix::new(2);
        m.set(0, 1, true);
        m.set(1, 0, true);

        m.grow(3);

        assert_eq!(m.side(), 5);
        assert_eq!(m.rows().len(), 5);
        assert!(m.get(0, 1));
        assert!(m.get(1, 0));
        assert!(!m.get(4, 4));
        assert!(m.rows().iter().all(|row| row.len() == 5));
    }

    #[test]
    fn grow_from_empty() {
        let mut m = AdjacencyMatrix::new(0);
        m.grow(2);
        m.set(1, 0, true);
        assert!(m.get(1, 0));
    }

    #[test]
    fn clear_row_zeroes_without_shrinking() {
        let mut m = AdjacencyMatrix::new(3);
        m.set(1, 0, true);
        m.set(1, 2, true);
        m.set(0, 1, true);

        m.clear_row(1);

        assert_eq!(m.side(), 3);
        assert!(!m.get(1, 0));
        assert!(!m.get(1, 2));
        assert!(m.get(0, 1), "other rows are untouched");
    }

    #[test]
    fn symmetry_check() {
        let mut m = AdjacencyMatrix::new(3);
        m.set(0, 2, true);
        assert!(!m.is_symmetric());
        m.set(2, 0, true);
        assert!(m.is_symmetric());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_panics() {
        let m = AdjacencyMatrix::new(2);
        let _ = m.get(0, 2);
    }

    #[test]
    fn display_renders_header_and_rows() {
        let mut m = AdjacencyMatrix::new(2);
        m.set(0, 1, true);
        m.set(1, 0, true);
        assert_eq!(m.to_string(), "  0 1\n0 0 1\n1 1 0");
    }
}
