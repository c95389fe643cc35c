use std::fmt::Debug;

use log::trace;

use crate::PercolationError;

/// A disjoint-set forest over the fixed element range `[0, n)`.
///
/// Uses union by size together with path compression in [`UnionFind::find`],
/// so a long sequence of operations costs near-constant amortised time each.
/// Elements can neither be added nor removed after construction.
pub struct UnionFind {
    parent: Vec<i32>,
    size: Vec<i32>,
    count: i32,
    n: i32,
}

impl UnionFind {
    pub fn new(n: i32) -> Result<Self, PercolationError> {
        if n < 0 {
            return Err(PercolationError::InvalidSize(n));
        }
        Ok(UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            count: n,
            n,
        })
    }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, x: i32) -> Result<i32, PercolationError> {
        self.validate(x)?;
        Ok(self.root(x))
    }

    /// Merges the sets containing `x` and `y`, returning `false` if they were
    /// already the same set.
    pub fn union(&mut self, x: i32, y: i32) -> Result<bool, PercolationError> {
        self.validate(x)?;
        self.validate(y)?;
        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return Ok(false);
        }

        let (small, large) = if self.size[root_x as usize] < self.size[root_y as usize] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small as usize] = large;
        self.size[large as usize] += self.size[small as usize];
        self.count -= 1;
        trace!("union {x} ~ {y}: root {small} now under {large}");
        Ok(true)
    }

    pub fn connected(&mut self, x: i32, y: i32) -> Result<bool, PercolationError> {
        self.validate(x)?;
        self.validate(y)?;
        Ok(self.root(x) == self.root(y))
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: i32) -> Result<i32, PercolationError> {
        let root = self.find(x)?;
        Ok(self.size[root as usize])
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn len(&self) -> i32 {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    // Union by size keeps the depth logarithmic, so the recursion stays shallow.
    fn root(&mut self, x: i32) -> i32 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.root(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    fn validate(&self, x: i32) -> Result<(), PercolationError> {
        if x < 0 || x >= self.n {
            return Err(PercolationError::IndexOutOfRange {
                index: x,
                bound: self.n,
            });
        }
        Ok(())
    }
}

impl Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionFind")
            .field("parent", &self.parent)
            .field("size", &self.size)
            .field("count", &self.count)
            .field("n", &self.n)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;
    use crate::PercolationError;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4).unwrap();
        assert_eq!(uf.count(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i).unwrap(), i);
            assert_eq!(uf.set_size(i).unwrap(), 1);
        }
    }

    #[test]
    fn test_negative_size_rejected() {
        assert_eq!(
            UnionFind::new(-1).unwrap_err(),
            PercolationError::InvalidSize(-1)
        );
    }

    #[test]
    fn test_empty() {
        let mut uf = UnionFind::new(0).unwrap();
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
        assert!(uf.find(0).is_err());
    }

    #[test]
    fn test_transitive_connectivity() {
        let mut uf = UnionFind::new(5).unwrap();
        assert!(uf.union(0, 1).unwrap());
        assert!(uf.union(1, 2).unwrap());
        assert!(uf.connected(0, 2).unwrap());
        assert!(!uf.connected(0, 3).unwrap());

        assert!(uf.union(3, 4).unwrap());
        assert!(!uf.connected(2, 4).unwrap());
        assert_eq!(uf.count(), 2);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut uf = UnionFind::new(3).unwrap();
        assert!(uf.union(0, 1).unwrap());
        assert!(!uf.union(1, 0).unwrap());
        assert!(!uf.union(2, 2).unwrap());
        assert_eq!(uf.count(), 2);
        assert_eq!(uf.set_size(0).unwrap(), 2);
    }

    #[test]
    fn test_smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(4).unwrap();
        let _ = uf.union(0, 1).unwrap();
        let _ = uf.union(0, 2).unwrap();
        let big_root = uf.find(0).unwrap();
        let _ = uf.union(3, 0).unwrap();
        assert_eq!(uf.find(3).unwrap(), big_root);
        assert_eq!(uf.set_size(3).unwrap(), 4);
    }

    #[test]
    fn test_find_compresses_path_to_root() {
        let mut uf = UnionFind::new(4).unwrap();
        let _ = uf.union(0, 1).unwrap();
        let _ = uf.union(2, 3).unwrap();
        let _ = uf.union(0, 2).unwrap();
        // 3 -> 2 -> 0
        assert_eq!(uf.parent[3], 2);
        assert_eq!(uf.parent[2], 0);

        assert_eq!(uf.find(3).unwrap(), 0);
        assert_eq!(uf.parent[3], 0);
    }

    #[test]
    fn test_out_of_range() {
        let mut uf = UnionFind::new(3).unwrap();
        assert_eq!(
            uf.union(0, 3).unwrap_err(),
            PercolationError::IndexOutOfRange { index: 3, bound: 3 }
        );
        assert!(uf.connected(-1, 0).is_err());
        assert!(uf.find(5).is_err());
        // a rejected union leaves the forest untouched
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn test_long_chain_stays_connected() {
        let n = 10_000;
        let mut uf = UnionFind::new(n).unwrap();
        for i in 1..n {
            let _ = uf.union(i - 1, i).unwrap();
        }
        assert_eq!(uf.count(), 1);
        assert!(uf.connected(0, n - 1).unwrap());
        assert_eq!(uf.set_size(n / 2).unwrap(), n);
    }
}
