use std::ops::AddAssign;

use serde::Serialize;

use crate::input::Gender;
use crate::model::cell::Cell;

/// One row of the cross-tab: a cell per column plus the row total.
///
/// Used for RT rows, RW subtotals and the grand total alike. Columns are
/// positional and follow the owning report's column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tally {
    cells: Vec<Cell>,
    total: Cell,
}

impl Tally {
    pub fn zeroed(columns: usize) -> Self {
        Self {
            cells: vec![Cell::default(); columns],
            total: Cell::default(),
        }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let total = cells.iter().sum();
        Self { cells, total }
    }

    /// Counts one person in `column`.
    ///
    /// Panics if `column` is out of range; callers size the tally from the
    /// same column list they classify against.
    pub fn record(&mut self, column: usize, gender: Gender) {
        self.cells[column].record(gender);
        self.total.record(gender);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<Cell> {
        self.cells.get(column).copied()
    }

    pub fn total(&self) -> Cell {
        self.total
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Drops the last column. Only valid when that column is empty.
    pub(crate) fn drop_last_empty_column(&mut self) {
        if let Some(last) = self.cells.last() {
            debug_assert!(last.is_empty());
            if last.is_empty() {
                self.cells.pop();
            }
        }
    }

    /// Row total recomputed from the cells.
    pub fn cells_sum(&self) -> Cell {
        self.cells.iter().sum()
    }
}

impl AddAssign<&Tally> for Tally {
    fn add_assign(&mut self, rhs: &Tally) {
        if self.cells.len() < rhs.cells.len() {
            self.cells.resize(rhs.cells.len(), Cell::default());
        }
        for (acc, cell) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            *acc += *cell;
        }
        self.total += rhs.total;
    }
}

impl<'a> std::iter::Sum<&'a Tally> for Tally {
    fn sum<I: Iterator<Item = &'a Tally>>(iter: I) -> Tally {
        let mut acc = Tally::default();
        for t in iter {
            acc += t;
        }
        acc
    }
}
