use std::fmt::Debug;

/// A grid coordinate. Rows grow downwards from the top row 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: i32,
    pub col: i32,
}

const ADJACENT: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl Site {
    pub fn new(row: i32, col: i32) -> Self {
        Site { row, col }
    }

    pub fn is_within(&self, dimension: i32) -> bool {
        (0..dimension).contains(&self.row) && (0..dimension).contains(&self.col)
    }

    /// Row-major index of the site; callers check [`Site::is_within`] first.
    pub(crate) fn index(&self, dimension: i32) -> i32 {
        self.row * dimension + self.col
    }

    /// The four orthogonal neighbours that lie inside the grid.
    pub fn neighbours(self, dimension: i32) -> impl Iterator<Item = Site> {
        ADJACENT
            .iter()
            .filter_map(move |(d_row, d_col)| {
                Some(Site::new(
                    self.row.checked_add(*d_row)?,
                    self.col.checked_add(*d_col)?,
                ))
            })
            .filter(move |site| site.is_within(dimension))
    }
}

impl Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
