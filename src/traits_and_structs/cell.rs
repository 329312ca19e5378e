/// One position on the board together with its staged next state.
///
/// `row` and `column` are fixed when the board is built. `will_be_alive` is
/// scratch space for [`Board::step`](crate::Board::step) and carries no
/// meaning between steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
    will_be_alive: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize, alive: bool) -> Self {
        Self {
            row,
            column,
            alive,
            will_be_alive: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Stage the next state from the live neighbour count.
    ///
    /// Always writes `will_be_alive`, so a survivor never depends on whatever
    /// the previous step left behind.
    pub(crate) fn cycle(&mut self, live_neighbors: u8) {
        self.will_be_alive = matches!(
            (self.alive, live_neighbors),
            (true, 2) | (true, 3) | (false, 3)
        );
    }

    pub(crate) fn commit(&mut self) {
        self.alive = self.will_be_alive;
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }

    pub(crate) fn toggle(&mut self) {
        self.alive = !self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survives_with_two_or_three() {
        for n in 0..=8 {
            let mut cell = Cell::new(0, 0, true);
            cell.cycle(n);
            cell.commit();
            assert_eq!(cell.is_alive(), n == 2 || n == 3, "neighbours = {}", n);
        }
    }

    #[test]
    fn born_with_exactly_three() {
        for n in 0..=8 {
            let mut cell = Cell::new(0, 0, false);
            cell.cycle(n);
            cell.commit();
            assert_eq!(cell.is_alive(), n == 3, "neighbours = {}", n);
        }
    }

    #[test]
    fn stale_stage_is_overwritten() {
        let mut cell = Cell::new(2, 5, true);
        cell.will_be_alive = false;
        cell.cycle(2);
        cell.commit();
        assert!(cell.is_alive());
        assert_eq!((cell.row(), cell.column()), (2, 5));
    }
}
