//! N×N percolation model backed by weighted union-find
//!
//! Two virtual nodes sit after the N² real sites: `virtual_top` is joined to
//! every open site in row 1 and `virtual_bottom` to every open site in row N.
//! The system percolates exactly when the two virtual nodes share a set, so
//! the query is a single `connected` call instead of a scan over row pairs.
//!
//! A second union-find (`fullness`) carries only `virtual_top`. Querying
//! fullness there keeps bottom-row sites from looking full through
//! `virtual_bottom` once the grid percolates.

use crate::error::PercolationError;
use crate::grid::{neighbors, site_index, validate};
use crate::union_find::UnionFind;

#[derive(Clone, Debug)]
pub struct Percolation {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    uf: UnionFind,
    fullness: UnionFind,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl Percolation {
    /// Create an n-by-n grid with all sites blocked
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n < 1 {
            return Err(PercolationError::InvalidGridSize { size: n });
        }
        let sites = n
            .checked_mul(n)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidGridSize { size: n })?;

        log::debug!("Creating {n}x{n} percolation grid ({sites} sites)");

        Ok(Percolation {
            size: n,
            open: vec![false; sites],
            open_count: 0,
            uf: UnionFind::new(sites + 2),
            fullness: UnionFind::new(sites + 1),
            virtual_top: sites,
            virtual_bottom: sites + 1,
        })
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Open site (row, col) and join it to its open neighbors. Opening an
    /// already-open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        validate(row, col, self.size)?;

        let index = site_index(row, col, self.size);
        if self.open[index] {
            return Ok(());
        }

        let track_onset = log::log_enabled!(log::Level::Debug);
        let percolated_before = track_onset && self.percolates();

        self.open[index] = true;
        self.open_count += 1;
        log::trace!("Opened site ({row}, {col})");

        for neighbor in neighbors(row, col, self.size) {
            let other = site_index(neighbor.row, neighbor.col, self.size);
            if self.open[other] {
                self.uf.union(index, other);
                self.fullness.union(index, other);
            }
        }

        if row == 1 {
            self.uf.union(index, self.virtual_top);
            self.fullness.union(index, self.virtual_top);
        }
        if row == self.size {
            self.uf.union(index, self.virtual_bottom);
        }

        if track_onset && !percolated_before && self.percolates() {
            log::debug!(
                "Grid percolates after opening ({row}, {col}) with {} open sites",
                self.open_count
            );
        }

        Ok(())
    }

    /// Is site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        validate(row, col, self.size)?;
        Ok(self.open[site_index(row, col, self.size)])
    }

    /// Is site (row, col) full, i.e. reachable from the top row through open sites?
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        validate(row, col, self.size)?;
        Ok(self.is_full_index(site_index(row, col, self.size)))
    }

    /// Open state by flat index; `index` must be below `size²`
    pub(crate) fn is_open_index(&self, index: usize) -> bool {
        self.open[index]
    }

    /// Fullness by flat index; `index` must be below `size²`
    pub(crate) fn is_full_index(&self, index: usize) -> bool {
        self.open[index] && self.fullness.same_set(index, self.virtual_top)
    }

    /// Number of open sites
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does the system percolate?
    pub fn percolates(&mut self) -> bool {
        self.uf.connected(self.virtual_top, self.virtual_bottom)
    }

    /// Fraction of sites that are open
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.open.len() as f64
    }
}
