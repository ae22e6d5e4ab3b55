//! Site coordinates and flat indexing for an N×N grid
//!
//! Sites are 1-indexed `(row, col)` pairs. The flat layout is row-major:
//! `(row, col) -> (row - 1) * n + (col - 1)`, giving indices in `[0, n²)`.

use crate::error::PercolationError;

/// A 1-indexed grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Self {
        Site { row, col }
    }
}

/// Row-major flat index of a site already known to be in bounds
#[inline]
pub fn site_index(row: usize, col: usize, n: usize) -> usize {
    (row - 1) * n + (col - 1)
}

/// Inverse of [`site_index`]
#[inline]
pub fn index_site(index: usize, n: usize) -> Site {
    Site {
        row: index / n + 1,
        col: index % n + 1,
    }
}

/// Bounds guard shared by every coordinate-taking operation
pub fn validate(row: usize, col: usize, n: usize) -> Result<(), PercolationError> {
    if row < 1 || col < 1 || row > n || col > n {
        return Err(PercolationError::OutOfBounds { row, col, size: n });
    }
    Ok(())
}

/// The up-to-four orthogonal neighbors of an in-bounds site that lie on the grid
pub fn neighbors(row: usize, col: usize, n: usize) -> impl Iterator<Item = Site> {
    let up = (row > 1).then(|| Site::new(row - 1, col));
    let down = (row < n).then(|| Site::new(row + 1, col));
    let left = (col > 1).then(|| Site::new(row, col - 1));
    let right = (col < n).then(|| Site::new(row, col + 1));
    [up, down, left, right].into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_index_row_major() {
        assert_eq!(site_index(1, 1, 3), 0);
        assert_eq!(site_index(1, 3, 3), 2);
        assert_eq!(site_index(2, 1, 3), 3);
        assert_eq!(site_index(3, 3, 3), 8);
    }

    #[test]
    fn test_site_index_is_bijection() {
        let n = 7;
        let mut seen = vec![false; n * n];
        for row in 1..=n {
            for col in 1..=n {
                let i = site_index(row, col, n);
                assert!(!seen[i], "index {i} produced twice");
                seen[i] = true;
                assert_eq!(index_site(i, n), Site::new(row, col));
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_validate_edges() {
        let n = 4;
        assert!(validate(1, 1, n).is_ok());
        assert!(validate(n, n, n).is_ok());
        for (row, col) in [(0, 1), (1, 0), (n + 1, 1), (1, n + 1), (0, 0)] {
            assert_eq!(
                validate(row, col, n),
                Err(PercolationError::OutOfBounds { row, col, size: n })
            );
        }
    }

    #[test]
    fn test_neighbors_corner_edge_interior() {
        let corner: Vec<Site> = neighbors(1, 1, 3).collect();
        assert_eq!(corner, vec![Site::new(2, 1), Site::new(1, 2)]);

        assert_eq!(neighbors(1, 2, 3).count(), 3);
        assert_eq!(neighbors(2, 2, 3).count(), 4);
        assert_eq!(neighbors(1, 1, 1).count(), 0);
    }
}
