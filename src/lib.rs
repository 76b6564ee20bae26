pub mod heuristic;
pub mod node;
pub mod puzzle;
pub mod report;
pub mod solver;

pub use heuristic::{Heuristic, Manhattan, Misplaced, Zero};
pub use node::{expand, Ledger, Node, NodeId};
pub use puzzle::{Board, BoardError, Move};
pub use report::{write_report, Palette};
pub use solver::{AStar, BreadthFirst, IterativeDeepening, Solution, SolveError};
