use std::fmt::Debug;

use itertools::Itertools;
use log::debug;
use log::trace;

use super::Site;
use crate::connectivity::UnionFind;
use crate::PercolationError;
use crate::RandomSource;

/// An n-by-n grid of sites that are opened one at a time.
///
/// Connectivity lives in a [`UnionFind`] over the n² sites plus two virtual
/// terminals: every open top-row site is joined to `virtual_top` and every
/// open bottom-row site to `virtual_bottom`, so the grid percolates exactly
/// when the two terminals share a set.
pub struct Percolation {
    n: i32,
    open: Vec<bool>,
    open_count: i32,
    forest: UnionFind,
    virtual_top: i32,
    virtual_bottom: i32,
}

impl Percolation {
    pub fn new(n: i32) -> Result<Self, PercolationError> {
        if n < 1 {
            return Err(PercolationError::InvalidDimension(n));
        }
        let squared = n
            .checked_mul(n)
            .filter(|squared| squared.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidDimension(n))?;

        let forest = UnionFind::new(squared + 2)?;
        debug!("created {n}x{n} percolation grid with {} nodes", forest.len());
        Ok(Percolation {
            n,
            open: vec![false; squared as usize],
            open_count: 0,
            forest,
            virtual_top: squared,
            virtual_bottom: squared + 1,
        })
    }

    pub fn dimension(&self) -> i32 {
        self.n
    }

    pub fn number_of_open_sites(&self) -> i32 {
        self.open_count
    }

    /// Every coordinate of the grid in row-major order.
    pub fn sites(&self) -> impl Iterator<Item = Site> {
        (0..self.n)
            .cartesian_product(0..self.n)
            .map(|(row, col)| Site::new(row, col))
    }

    pub fn is_open(&self, row: i32, col: i32) -> Result<bool, PercolationError> {
        let site = self.validate(row, col)?;
        Ok(self.open[site.index(self.n) as usize])
    }

    /// Opens the site and connects it to its open neighbours. Returns `false`
    /// if the site was already open, in which case nothing changes.
    pub fn open(&mut self, row: i32, col: i32) -> Result<bool, PercolationError> {
        let site = self.validate(row, col)?;
        let index = site.index(self.n);
        if self.open[index as usize] {
            return Ok(false);
        }
        self.open[index as usize] = true;
        self.open_count += 1;
        trace!("opened site {site:?}");

        if row == 0 {
            let _ = self.forest.union(self.virtual_top, index)?;
        }
        if row == self.n - 1 {
            let _ = self.forest.union(self.virtual_bottom, index)?;
        }
        for neighbour in site.neighbours(self.n) {
            let neighbour_index = neighbour.index(self.n);
            if self.open[neighbour_index as usize] {
                let _ = self.forest.union(index, neighbour_index)?;
            }
        }
        Ok(true)
    }

    /// Opens each site independently with probability `p`, visiting the grid
    /// in row-major order.
    pub fn open_all<R: RandomSource + ?Sized>(
        &mut self,
        p: f64,
        source: &mut R,
    ) -> Result<(), PercolationError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(PercolationError::InvalidProbability(p));
        }
        let n = self.n;
        for (row, col) in (0..n).cartesian_product(0..n) {
            if source.bernoulli(p)? {
                let _ = self.open(row, col)?;
            }
        }
        debug!(
            "opened {} of {} sites with p = {p}",
            self.open_count,
            self.n * self.n
        );
        Ok(())
    }

    /// Whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        // Both terminals lie inside the forest, so the error arm is unreachable.
        matches!(
            self.forest.connected(self.virtual_top, self.virtual_bottom),
            Ok(true)
        )
    }

    fn validate(&self, row: i32, col: i32) -> Result<Site, PercolationError> {
        let site = Site::new(row, col);
        if !site.is_within(self.n) {
            return Err(PercolationError::SiteOutOfRange {
                row,
                col,
                dimension: self.n,
            });
        }
        Ok(site)
    }
}

impl Debug for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Percolation")
            .field("n", &self.n)
            .field("open", &self.open)
            .field("open_count", &self.open_count)
            .field("forest", &self.forest)
            .finish()
    }
}
