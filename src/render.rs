//! Text view of a percolation grid
//!
//! One line per row: `#` blocked, `.` open but not full, `o` full.

use std::fmt;

use crate::percolation::Percolation;

pub const BLOCKED: char = '#';
pub const OPEN: char = '.';
pub const FULL: char = 'o';

fn site_char(p: &Percolation, index: usize) -> char {
    if !p.is_open_index(index) {
        BLOCKED
    } else if p.is_full_index(index) {
        FULL
    } else {
        OPEN
    }
}

/// Render the grid, one newline-terminated line per row
pub fn render(p: &Percolation) -> String {
    p.to_string()
}

impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            let line: String = (row * n..(row + 1) * n)
                .map(|index| site_char(self, index))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
