//! The three search engines.
//!
//! They share [`Board`], [`Node`](crate::node::Node) and
//! [`expand`](crate::node::expand) but nothing else: each owns its frontier,
//! its ordering and its bookkeeping for the duration of one `solve` call.

mod astar;
mod bfs;
mod ids;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use ids::IterativeDeepening;

use thiserror::Error;

use crate::node::{Node, NodeId};
use crate::puzzle::{Board, Move};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("frontier exhausted after expanding {expanded} nodes; the goal is unreachable")]
    Unreachable { expanded: usize },
    #[error("parent {0} is missing from the expanded-node ledger")]
    MissingLedgerEntry(NodeId),
    #[error("no solution within {0} moves")]
    DepthLimit(u32),
}

/// A root-to-goal path plus the search statistics behind it.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Nodes expanded before the goal was dequeued.
    pub expanded: usize,
    /// Nodes generated while searching.
    pub generated: usize,
    /// Root first, goal last.
    pub path: Vec<Node>,
}

impl Solution {
    /// Moves from the initial board to the goal.
    pub fn cost(&self) -> u32 {
        self.path.last().map_or(0, |node| node.cost)
    }

    pub fn actions(&self) -> Vec<Move> {
        self.path.iter().filter_map(|node| node.action).collect()
    }

    pub fn initial(&self) -> Option<&Board> {
        self.path.first().map(|node| &node.state)
    }

    pub fn terminal(&self) -> Option<&Board> {
        self.path.last().map(|node| &node.state)
    }
}
