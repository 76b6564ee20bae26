use std::fmt;

use crate::heuristic::Heuristic;
use crate::puzzle::{Board, Move};
use crate::solver::SolveError;

/// Position of a node in a [`Ledger`]. Ids start at 1 and follow expansion
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One position in the search tree.
///
/// `parent` only names the parent's ledger slot; the ledger owns the parent.
/// Two nodes are equal when their boards are, however they were reached.
#[derive(Debug, Clone)]
pub struct Node {
    pub state: Board,
    /// Move that produced this node, `None` at the root.
    pub action: Option<Move>,
    pub cost: u32,
    pub parent: Option<NodeId>,
    /// Remaining-cost estimate, fixed at construction. Zero for the
    /// uninformed engines.
    pub heuristic: u32,
}

impl Node {
    pub fn root(state: Board, heuristic: u32) -> Self {
        Self {
            state,
            action: None,
            cost: 0,
            parent: None,
            heuristic,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn estimated_total(&self) -> u32 {
        self.cost + self.heuristic
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node {}

/// Successors of `parent`, one per legal blank move, in `U D R L` order.
///
/// `parent_id` is the ledger id the caller assigned to `parent`.
pub fn expand<H>(parent: &Node, parent_id: NodeId, heuristic: &H) -> Vec<Node>
where
    H: Heuristic + ?Sized,
{
    Move::ALL
        .iter()
        .filter_map(|&dir| {
            parent.state.apply(dir).map(|state| Node {
                state,
                action: Some(dir),
                cost: parent.cost + 1,
                parent: Some(parent_id),
                heuristic: heuristic.estimate(&state),
            })
        })
        .collect()
}

/// Append-only store of expanded nodes, addressed by [`NodeId`].
#[derive(Debug, Default)]
pub struct Ledger {
    nodes: Vec<Node>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id the next pushed node will receive.
    pub fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len() as u32 + 1)
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = self.next_id();
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|index| self.nodes.get(index))
    }

    /// Root-to-`node` path, recovered by following parent ids.
    pub fn path_to(&self, node: Node) -> Result<Vec<Node>, SolveError> {
        let mut path = vec![node];
        while let Some(parent_id) = path[path.len() - 1].parent {
            let parent = self
                .get(parent_id)
                .ok_or(SolveError::MissingLedgerEntry(parent_id))?;
            path.push(parent.clone());
        }
        path.reverse();
        Ok(path)
    }
}
