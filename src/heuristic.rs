//! Remaining-cost estimates for the A* engine.
//!
//! Every estimate here ignores the blank. Counting it can exceed the true
//! distance (one move away from the goal misplaces both the blank and a
//! tile), which would break the optimality of A*.

use std::collections::BTreeMap;

use crate::puzzle::{Board, BLANK, SIZE};

pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(&Board) -> u32,
{
    fn estimate(&self, board: &Board) -> u32 {
        self(board)
    }
}

/// Always zero. A* with this estimate expands in breadth-first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _board: &Board) -> u32 {
        0
    }
}

/// Number of tiles sitting on a cell whose goal label differs.
#[derive(Debug, Clone)]
pub struct Misplaced {
    goal: Board,
}

impl Misplaced {
    pub fn new(goal: &Board) -> Self {
        Self { goal: *goal }
    }
}

impl Heuristic for Misplaced {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .cells()
            .iter()
            .zip(self.goal.cells().iter())
            .filter(|&(&cell, &target)| cell != BLANK && cell != target)
            .count() as u32
    }
}

type Pos = (usize, usize);

/// Sum of grid distances from each tile to a goal cell with its label.
///
/// Repeated labels are paired with their goal cells in the cheapest way, so
/// the estimate stays a lower bound.
#[derive(Debug, Clone)]
pub struct Manhattan {
    targets: BTreeMap<i8, Vec<Pos>>,
}

impl Manhattan {
    pub fn new(goal: &Board) -> Self {
        Self {
            targets: positions(goal),
        }
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        positions(board)
            .iter()
            .map(|(label, cells)| match self.targets.get(label) {
                Some(targets) => cheapest_pairing(cells, targets),
                // a label the goal lacks can never be placed
                None => u32::MAX / 2,
            })
            .fold(0u32, u32::saturating_add)
    }
}

fn positions(board: &Board) -> BTreeMap<i8, Vec<Pos>> {
    let mut positions: BTreeMap<i8, Vec<Pos>> = BTreeMap::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let cell = board.cell(row, col);
            if cell != BLANK {
                positions.entry(cell).or_default().push((row, col));
            }
        }
    }
    positions
}

fn distance(a: Pos, b: Pos) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Minimum total distance over all one-to-one pairings of `cells` with
/// `targets`. Label groups hold at most a couple of cells, so exhaustive
/// search is fine.
fn cheapest_pairing(cells: &[Pos], targets: &[Pos]) -> u32 {
    match cells.split_first() {
        None => 0,
        Some((&first, rest)) => (0..targets.len())
            .map(|pick| {
                let mut remaining = targets.to_vec();
                let target = remaining.swap_remove(pick);
                distance(first, target) + cheapest_pairing(rest, &remaining)
            })
            .min()
            .unwrap_or(u32::MAX / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [i8; 9]) -> Board {
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn goal_scores_zero() {
        assert_eq!(Manhattan::new(&Board::GOAL).estimate(&Board::GOAL), 0);
        assert_eq!(Misplaced::new(&Board::GOAL).estimate(&Board::GOAL), 0);
        assert_eq!(Zero.estimate(&Board::GOAL), 0);
    }

    #[test]
    fn single_move_scores_one() {
        let near = board([1, 1, 2, 3, 3, 4, 5, -1, 6]);
        assert_eq!(Manhattan::new(&Board::GOAL).estimate(&near), 1);
        assert_eq!(Misplaced::new(&Board::GOAL).estimate(&near), 1);
    }

    #[test]
    fn duplicates_take_cheapest_pairing() {
        // one 1 at (2,0), the other on its goal cell (0,1)
        let far = board([-1, 1, 2, 3, 3, 4, 1, 5, 6]);
        let manhattan = Manhattan::new(&Board::GOAL);
        // 1: (2,0)->(0,0) = 2, (0,1)->(0,1) = 0
        // 3s in place; 4 in place; 5: (2,1)->(2,0) = 1; 6: (2,2)->(2,1) = 1
        assert_eq!(manhattan.estimate(&far), 4);
    }

    #[test]
    fn scenario_board_estimates() {
        let start = board([1, 2, 3, -1, 1, 3, 4, 5, 6]);
        // 2: (0,1)->(0,2) 1, 3s: {(0,2),(1,2)} -> {(1,0),(1,1)} 2+2 or 3+1 = 4,
        // 1s: {(0,0),(1,1)} -> {(0,0),(0,1)} 1, 4: (2,0)->(1,2) 3,
        // 5: (2,1)->(2,0) 1, 6: (2,2)->(2,1) 1
        assert_eq!(Manhattan::new(&Board::GOAL).estimate(&start), 11);
        assert_eq!(Misplaced::new(&Board::GOAL).estimate(&start), 7);
    }

    #[test]
    fn closures_are_heuristics() {
        let constant = |_: &Board| 3u32;
        assert_eq!(constant.estimate(&Board::GOAL), 3);
    }
}
