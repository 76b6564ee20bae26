use std::collections::{HashMap, VecDeque};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use tile_search::puzzle::{BLANK, TILES};
use tile_search::{
    AStar, Board, BreadthFirst, IterativeDeepening, Manhattan, Misplaced, Move, Solution,
    SolveError, Zero,
};

const SCENARIO: &str = "1,2,3,-1,1,3,4,5,6";

/// Exhaustive distances from `goal` to every board reachable from it.
fn distances_from(goal: &Board) -> HashMap<Board, u32> {
    let mut distances = HashMap::from([(*goal, 0)]);
    let mut queue = VecDeque::from([*goal]);
    while let Some(board) = queue.pop_front() {
        let depth = distances[&board];
        for dir in Move::ALL {
            if let Some(next) = board.apply(dir) {
                distances.entry(next).or_insert_with(|| {
                    queue.push_back(next);
                    depth + 1
                });
            }
        }
    }
    distances
}

fn replay(initial: &Board, actions: &[Move]) -> Board {
    actions.iter().fold(*initial, |board, &dir| {
        board.apply(dir).expect("recorded action leaves the grid")
    })
}

fn check_solution(initial: &Board, goal: &Board, solution: &Solution) {
    let path = &solution.path;
    assert!(path[0].is_root());
    assert_eq!(path[0].cost, 0);
    assert_eq!(path[0].action, None);
    assert_eq!(solution.initial(), Some(initial));
    for pair in path.windows(2) {
        assert_eq!(pair[1].cost, pair[0].cost + 1);
        assert!(pair[1].action.is_some());
    }

    let mut expected = TILES;
    expected.sort_unstable();
    for node in path {
        let mut cells = node.state.cells();
        assert_eq!(cells.iter().filter(|&&c| c == BLANK).count(), 1);
        cells.sort_unstable();
        assert_eq!(cells, expected);
    }

    assert_eq!(solution.terminal(), Some(goal));
    assert_eq!(replay(initial, &solution.actions()), *goal);
    assert_eq!(solution.actions().len() as u32, solution.cost());
}

fn random_walk(rng: &mut StdRng, steps: usize) -> Board {
    let mut board = Board::GOAL;
    for _ in 0..steps {
        let options: Vec<Board> = Move::ALL.iter().filter_map(|&dir| board.apply(dir)).collect();
        board = *options.choose(rng).unwrap();
    }
    board
}

#[test]
fn whole_state_space_is_connected() {
    let distances = distances_from(&Board::GOAL);
    assert_eq!(distances.len(), 90_720);
    assert_eq!(distances.values().max(), Some(&30));
}

#[test]
fn scenario_agrees_across_engines() {
    let start: Board = SCENARIO.parse().unwrap();
    let goal = Board::GOAL;
    let truth = distances_from(&goal)[&start];
    assert_eq!(truth, 19);

    let bfs = BreadthFirst::new().solve(&start, &goal).unwrap();
    let ids = IterativeDeepening::new().solve(&start, &goal).unwrap();
    let astar = AStar::new(Manhattan::new(&goal)).solve(&start, &goal).unwrap();

    for solution in [&bfs, &ids, &astar] {
        assert_eq!(solution.cost(), truth);
        check_solution(&start, &goal, solution);
    }
}

#[test]
fn scenario_statistics_are_reproducible() {
    let start: Board = SCENARIO.parse().unwrap();
    let goal = Board::GOAL;
    let labels = |solution: &Solution| -> String {
        solution.actions().iter().map(|a| a.label()).collect()
    };

    let bfs = BreadthFirst::new().solve(&start, &goal).unwrap();
    assert_eq!((bfs.expanded, bfs.generated), (28_140, 37_709));

    let ids = IterativeDeepening::new().solve(&start, &goal).unwrap();
    assert_eq!((ids.expanded, ids.generated), (144_263, 249_985));

    let misplaced = AStar::new(Misplaced::new(&goal)).solve(&start, &goal).unwrap();
    assert_eq!((misplaced.expanded, misplaced.generated), (1_904, 3_005));

    let manhattan = AStar::new(Manhattan::new(&goal)).solve(&start, &goal).unwrap();
    assert_eq!((manhattan.expanded, manhattan.generated), (248, 412));
    assert_eq!(labels(&manhattan), "DRRUULDLDRURDLLURRD");
}

#[test]
fn optimal_costs_on_random_boards() {
    let goal = Board::GOAL;
    let distances = distances_from(&goal);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..6 {
        let start = Board::random(&mut rng);
        let truth = distances[&start];

        let bfs = BreadthFirst::new().solve(&start, &goal).unwrap();
        let zero = AStar::new(Zero).solve(&start, &goal).unwrap();
        let misplaced = AStar::new(Misplaced::new(&goal)).solve(&start, &goal).unwrap();
        let manhattan = AStar::new(Manhattan::new(&goal)).solve(&start, &goal).unwrap();

        for solution in [&bfs, &zero, &misplaced, &manhattan] {
            assert_eq!(solution.cost(), truth, "start:\n{start}");
            assert!(solution.generated >= solution.expanded);
            check_solution(&start, &goal, solution);
        }
        assert_eq!(zero.path.len(), bfs.path.len());
    }
}

#[test]
fn iterative_deepening_is_optimal_on_shallow_boards() {
    let goal = Board::GOAL;
    let distances = distances_from(&goal);
    let mut rng = StdRng::seed_from_u64(42);

    for steps in [0, 3, 6, 9, 12] {
        let start = random_walk(&mut rng, steps);
        let solution = IterativeDeepening::new().solve(&start, &goal).unwrap();
        assert_eq!(solution.cost(), distances[&start]);
        check_solution(&start, &goal, &solution);
    }
}

#[test]
fn unreachable_goal_exhausts_frontier() {
    // distinct tiles split into two parity classes of 9!/2 boards each
    let goal = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, -1]).unwrap();
    let start = Board::from_cells([2, 1, 3, 4, 5, 6, 7, 8, -1]).unwrap();
    assert!(!start.is_solvable(&goal));

    let half = 181_440;
    assert_eq!(
        BreadthFirst::new().solve(&start, &goal).unwrap_err(),
        SolveError::Unreachable { expanded: half }
    );
    assert_eq!(
        AStar::new(Zero).solve(&start, &goal).unwrap_err(),
        SolveError::Unreachable { expanded: half }
    );
    assert_eq!(
        IterativeDeepening::with_max_depth(8)
            .solve(&start, &goal)
            .unwrap_err(),
        SolveError::DepthLimit(8)
    );
}
