use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

use tile_search::{
    write_report, AStar, Board, BreadthFirst, IterativeDeepening, Manhattan, Misplaced, Palette,
    Solution, SolveError, Zero,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Bfs,
    Ids,
    Astar,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicKind {
    Manhattan,
    Misplaced,
    Zero,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "tile-search", about = "Sliding-tile puzzle solver: BFS, IDS and A*")]
struct Args {
    /// Search strategy
    #[arg(long, value_enum, default_value_t = Strategy::Bfs)]
    strategy: Strategy,

    /// Remaining-cost estimate used by --strategy astar
    #[arg(long, value_enum, default_value_t = HeuristicKind::Misplaced)]
    heuristic: HeuristicKind,

    /// Initial board as nine row-major cells, blank as -1, e.g. "1,2,3,-1,1,3,4,5,6".
    /// A random board is drawn when omitted.
    #[arg(long, allow_hyphen_values = true)]
    initial: Option<Board>,

    /// Seed for the random initial board (deterministic)
    #[arg(long)]
    seed: Option<u64>,

    /// Give up iterative deepening past this many moves
    #[arg(long)]
    max_depth: Option<u32>,

    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

fn solve(args: &Args, initial: &Board, goal: &Board) -> Result<Solution, SolveError> {
    match args.strategy {
        Strategy::Bfs => BreadthFirst::new().solve(initial, goal),
        Strategy::Ids => match args.max_depth {
            Some(max) => IterativeDeepening::with_max_depth(max).solve(initial, goal),
            None => IterativeDeepening::new().solve(initial, goal),
        },
        Strategy::Astar => match args.heuristic {
            HeuristicKind::Manhattan => AStar::new(Manhattan::new(goal)).solve(initial, goal),
            HeuristicKind::Misplaced => AStar::new(Misplaced::new(goal)).solve(initial, goal),
            HeuristicKind::Zero => AStar::new(Zero).solve(initial, goal),
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let goal = Board::GOAL;
    let initial = match (args.initial, args.seed) {
        (Some(board), _) => board,
        (None, Some(seed)) => Board::random(&mut StdRng::seed_from_u64(seed)),
        (None, None) => Board::random(&mut thread_rng()),
    };
    info!("initial board:\n{initial}");

    if !initial.is_solvable(&goal) {
        bail!("the goal cannot be reached from\n{initial}");
    }

    let solution = solve(&args, &initial, &goal)
        .with_context(|| format!("{:?} search failed", args.strategy))?;
    info!(
        "{:?}: {} moves, {} expanded, {} generated",
        args.strategy,
        solution.cost(),
        solution.expanded,
        solution.generated
    );

    let palette = match args.color {
        ColorChoice::Auto => Palette::detect(),
        ColorChoice::Always => Palette::Color,
        ColorChoice::Never => Palette::Plain,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &solution, palette).context("failed to write report")?;
    out.flush()?;
    Ok(())
}
