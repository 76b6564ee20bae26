//! Text rendering of a [`Solution`].

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::node::Node;
use crate::puzzle::BLANK;
use crate::solver::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Color,
}

impl Palette {
    /// Colour only when stdout is a terminal.
    pub fn detect() -> Self {
        if io::stdout().is_tty() {
            Palette::Color
        } else {
            Palette::Plain
        }
    }
}

/// Writes the statistics, then every node on the path from root to goal.
pub fn write_report<W: Write>(out: &mut W, solution: &Solution, palette: Palette) -> io::Result<()> {
    writeln!(out, "Number of expanded Nodes : {}", solution.expanded)?;
    writeln!(out, "Number of generated Nodes : {}", solution.generated)?;
    writeln!(out, "Cost(level) to reach the goal : {}", solution.cost())?;

    for node in &solution.path {
        write_node(out, node, palette)?;
    }
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &Node, palette: Palette) -> io::Result<()> {
    let header = format!("Node at level {}", node.cost);
    match palette {
        Palette::Plain => writeln!(out, "{}", header)?,
        Palette::Color => writeln!(out, "{}", header.bold())?,
    }
    // the root has no action
    match (node.action, palette) {
        (None, _) => writeln!(out, "Action to reach state:")?,
        (Some(action), Palette::Plain) => writeln!(out, "Action to reach state: {}", action)?,
        (Some(action), Palette::Color) => {
            writeln!(out, "Action to reach state: {}", action.to_string().cyan())?
        }
    }

    for row in node.state.rows() {
        let mut cells = Vec::with_capacity(row.len());
        for &cell in row {
            let text = cell.to_string();
            cells.push(match palette {
                Palette::Color if cell == BLANK => text.dark_grey().to_string(),
                _ => text,
            });
        }
        writeln!(out, "{}", cells.join(" "))?;
    }
    writeln!(out)
}
