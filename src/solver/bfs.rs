use std::collections::VecDeque;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::{Solution, SolveError};
use crate::heuristic::Zero;
use crate::node::{expand, Ledger, Node};
use crate::puzzle::Board;

/// Level-order search. Finds a solution with the fewest moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        Self
    }

    pub fn solve(&self, initial: &Board, goal: &Board) -> Result<Solution, SolveError> {
        let mut frontier = VecDeque::from([Node::root(*initial, 0)]);
        let mut reached = FxHashSet::default();
        reached.insert(*initial);
        let mut ledger = Ledger::new();

        while let Some(current) = frontier.pop_front() {
            if current.state == *goal {
                debug!(
                    "bfs: goal at depth {} after {} expansions",
                    current.cost,
                    ledger.len()
                );
                return Ok(Solution {
                    expanded: ledger.len(),
                    // every board ever queued; the unexpanded frontier is
                    // already part of `reached`, so it is not added again
                    generated: reached.len(),
                    path: ledger.path_to(current)?,
                });
            }

            let id = ledger.next_id();
            for child in expand(&current, id, &Zero) {
                if reached.insert(child.state) {
                    frontier.push_back(child);
                }
            }
            trace!("bfs: expanded {id} at depth {}", current.cost);
            ledger.push(current);
        }

        Err(SolveError::Unreachable {
            expanded: ledger.len(),
        })
    }
}
