use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::input::Gender;

/// Male/female head count. `total` is always `male + female`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    male: u64,
    female: u64,
    total: u64,
}

impl Cell {
    pub fn new(male: u64, female: u64) -> Self {
        Self {
            male,
            female,
            total: male + female,
        }
    }

    pub fn male(&self) -> u64 {
        self.male
    }

    pub fn female(&self) -> u64 {
        self.female
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn record(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
        self.total += 1;
    }

    pub fn get(&self, gender: Gender) -> u64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.male + rhs.male, self.female + rhs.female)
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Cell) {
        *self = *self + rhs;
    }
}

impl Sum for Cell {
    fn sum<I: Iterator<Item = Cell>>(iter: I) -> Cell {
        iter.fold(Cell::default(), Add::add)
    }
}

impl<'a> Sum<&'a Cell> for Cell {
    fn sum<I: Iterator<Item = &'a Cell>>(iter: I) -> Cell {
        iter.copied().sum()
    }
}
