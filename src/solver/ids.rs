use log::debug;

use super::{Solution, SolveError};
use crate::heuristic::Zero;
use crate::node::{expand, Ledger, Node};
use crate::puzzle::Board;

/// Depth-first search re-run with a growing depth limit.
///
/// Keeps no reached-set. The only cycle check drops a successor equal to
/// the expanding node's own parent, so longer cycles are walked again
/// within one iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDeepening {
    max_depth: Option<u32>,
}

impl IterativeDeepening {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives up with [`SolveError::DepthLimit`] once the limit would pass
    /// `max_depth`. Without it an unreachable goal deepens forever.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    pub fn solve(&self, initial: &Board, goal: &Board) -> Result<Solution, SolveError> {
        let root = Node::root(*initial, 0);
        let mut generated = 0;
        let mut past_expanded = 0;

        let mut limit = 0;
        loop {
            limit += 1;
            if self.max_depth.map_or(false, |max| limit > max) {
                return Err(SolveError::DepthLimit(limit - 1));
            }

            let mut search = DepthLimited {
                goal,
                limit,
                ledger: Ledger::new(),
                generated: &mut generated,
            };
            if let Some(found) = search.visit(&root)? {
                let ledger = search.ledger;
                debug!("ids: goal at depth {} with limit {limit}", found.cost);
                return Ok(Solution {
                    expanded: past_expanded + ledger.len(),
                    generated,
                    path: ledger.path_to(found)?,
                });
            }

            past_expanded += search.ledger.len();
            debug!("ids: limit {limit} exhausted, {past_expanded} expanded so far");
        }
    }
}

/// One depth-bounded traversal. Its ledger is dropped when the limit fails.
struct DepthLimited<'a> {
    goal: &'a Board,
    limit: u32,
    ledger: Ledger,
    generated: &'a mut usize,
}

impl DepthLimited<'_> {
    fn visit(&mut self, current: &Node) -> Result<Option<Node>, SolveError> {
        if current.state == *self.goal {
            return Ok(Some(current.clone()));
        }
        if current.cost == self.limit {
            return Ok(None);
        }

        let parent_state = match current.parent {
            Some(parent_id) => Some(
                self.ledger
                    .get(parent_id)
                    .ok_or(SolveError::MissingLedgerEntry(parent_id))?
                    .state,
            ),
            None => None,
        };

        let id = self.ledger.push(current.clone());
        let children: Vec<Node> = expand(current, id, &Zero)
            .into_iter()
            .filter(|child| Some(child.state) != parent_state)
            .collect();
        *self.generated += children.len();

        for child in &children {
            if let Some(found) = self.visit(child)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}
