use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::{Solution, SolveError};
use crate::heuristic::Heuristic;
use crate::node::{expand, Ledger, Node};
use crate::puzzle::Board;

/// Best-first search on `cost + heuristic`.
///
/// A state is queued only the first time it is generated and is never
/// reopened, which keeps solutions optimal for admissible estimates on this
/// unit-cost puzzle.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H: Heuristic> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn solve(&self, initial: &Board, goal: &Board) -> Result<Solution, SolveError> {
        let root = Node::root(*initial, self.heuristic.estimate(initial));
        let mut reached = FxHashSet::default();
        reached.insert(*initial);
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(Ranked(root)));
        let mut ledger = Ledger::new();

        while let Some(Reverse(Ranked(current))) = frontier.pop() {
            if current.state == *goal {
                debug!(
                    "astar: goal at depth {} after {} expansions",
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
            for child in expand(&current, id, &self.heuristic) {
                if reached.insert(child.state) {
                    frontier.push(Reverse(Ranked(child)));
                }
            }
            trace!(
                "astar: expanded {id} with f = {} (g = {}, h = {})",
                current.estimated_total(),
                current.cost,
                current.heuristic
            );
            ledger.push(current);
        }

        Err(SolveError::Unreachable {
            expanded: ledger.len(),
        })
    }
}

/// Frontier entry. Orders by estimated total ascending, then cost
/// descending (on equal totals the deeper node leans less on the estimate),
/// then heuristic, action label and board ascending.
#[derive(Debug)]
struct Ranked(Node);

impl Ranked {
    fn key(&self) -> (u32, Reverse<u32>, u32, Option<char>, &Board) {
        let node = &self.0;
        (
            node.estimated_total(),
            Reverse(node.cost),
            node.heuristic,
            node.action.map(|action| action.label()),
            &node.state,
        )
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
