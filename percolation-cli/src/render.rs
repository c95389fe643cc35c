use percolation::Percolation;

const OPEN: char = '.';
const CLOSED: char = '#';

/// Draws the grid as text, one line per row with the top row first.
pub(crate) fn render(grid: &Percolation) -> String {
    let n = grid.dimension();
    let mut out = String::with_capacity((n * (n + 1)) as usize);
    for site in grid.sites() {
        let open = matches!(grid.is_open(site.row, site.col), Ok(true));
        out.push(if open { OPEN } else { CLOSED });
        if site.col == n - 1 {
            out.push('\n');
        }
    }
    out
}
